//! Scene scheduling for Sfera.
//!
//! The [`Scheduler`] owns an ordered collection of audio sources, each
//! time-windowed to a segment of a master video timeline. Driven by a
//! per-frame [`tick`](Scheduler::tick) and a slow
//! [`run_periodic_check`](Scheduler::run_periodic_check), it re-derives
//! every source's activation from the master clock each frame, interpolates
//! volume/position/rotation, composes the listener orientation onto
//! ambisonic sources, and hard-corrects transport drift against the master
//! clock.
//!
//! # Example
//!
//! ```ignore
//! use sfera_scene::{Scheduler, testing::RenderProbe};
//! use sfera_core::{Attribute, ManualClock, SourceConfig, TimeWindow, Vector3};
//!
//! let clock = std::sync::Arc::new(ManualClock::new());
//! let probe = RenderProbe::new();
//! let mut scheduler = Scheduler::new(clock.clone(), Box::new(probe.backend()));
//!
//! let config = SourceConfig::positional("clips/ducks.wav", Attribute::Static(Vector3::new(2.0, 0.0, -1.0)))
//!     .with_window(TimeWindow::new(10.0, 20.0)?);
//! let id = scheduler.register(config, transport)?;
//!
//! // Host frame callback:
//! scheduler.tick(clock.current_time());
//! ```

mod error;
pub use error::{Error, Result};

mod drift;
pub use drift::DriftPolicy;

mod source;
pub use source::SourceInfo;

mod orientation;
pub use orientation::ListenerFeed;

mod scheduler;
pub use scheduler::Scheduler;

pub mod testing;
