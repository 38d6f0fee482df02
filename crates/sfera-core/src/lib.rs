//! Core scheduling kernel for Sfera.
//!
//! Pure building blocks with no scheduling state of their own:
//! - [`Rotation`] / [`Vector3`] math, including the fixed column-major
//!   matrix layout ambisonic renderers expect
//! - [`Attribute`] interpolation over a [`TimeWindow`]
//! - [`SourceConfig`] validation
//! - The collaborator traits the scheduler is parameterized by:
//!   [`MasterClock`], [`MediaTransport`], [`RenderBackend`]
//! - Lock-free atomics for parameters shared across threads

mod error;
pub use error::{Error, Result};

mod math;
pub use math::{listener_basis, Rotation, Vector3};

mod window;
pub use window::TimeWindow;

mod interp;
pub use interp::{Attribute, Lerp};

mod config;
pub use config::{SourceConfig, SourceKind, SpatialParams};

mod backend;
pub use backend::{MasterClock, MediaTransport, RenderBackend, SourceId};

mod clock;
pub use clock::ManualClock;

mod lockfree;
pub use lockfree::{AtomicDouble, AtomicFlag, AtomicFloat};
