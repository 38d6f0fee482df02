//! # Sfera - Immersive Audio Scene Scheduler
//!
//! Sfera keeps a set of independently clocked audio clips positioned,
//! rotated, volume-shaped and phase-locked to a master 360-degree video
//! timeline. It owns the authoritative schedule: per frame it decides which
//! sources are audible, interpolates their spatial and volume parameters
//! across their time windows, composes the viewer's head orientation onto
//! ambisonic sound fields, and corrects clock drift between each clip's own
//! transport and the master clock.
//!
//! It does not decode or mix audio. Rendering, per-clip transport control
//! and the master clock stay with the host behind three narrow traits
//! ([`RenderBackend`], [`MediaTransport`], [`MasterClock`]).
//!
//! ## Architecture
//!
//! Sfera is an umbrella crate that coordinates:
//! - **sfera-core** - Kernel: rotation math, attribute interpolation, time
//!   windows, source configs, collaborator traits, lock-free atomics
//! - **sfera-scene** - Scheduling: source records, per-frame activation
//!   state machine, drift correction, listener orientation feed
//!
//! ## Quick Start
//!
//! ```ignore
//! use sfera::prelude::*;
//!
//! // The host owns the clock (usually mirroring a video element).
//! let clock = std::sync::Arc::new(ManualClock::new());
//!
//! let engine = SferaEngine::builder()
//!     .clock(clock.clone())
//!     .renderer(Box::new(my_spatial_renderer))
//!     .master_volume(0.5)
//!     .build()?;
//!
//! // A duck quacking two meters to the right between 10s and 20s.
//! engine.add_source(
//!     SourceConfig::positional(
//!         "clips/ducks.wav",
//!         Attribute::Static(Vector3::new(2.0, 0.0, -1.0)),
//!     )
//!     .with_window(TimeWindow::new(10.0, 20.0)?),
//!     duck_transport,
//! )?;
//!
//! // Drive it: once per rendered frame, plus a slow drift check.
//! engine.tick();
//! engine.run_periodic_check();
//! ```

/// Re-export of sfera-core for direct access
pub use sfera_core as core;

/// Re-export of sfera-scene for direct access
pub use sfera_scene as scene;

// Kernel types
pub use sfera_core::{
    listener_basis,
    AtomicDouble,
    AtomicFlag,

    // Lock-free primitives
    AtomicFloat,
    // Interpolation
    Attribute,
    Lerp,
    ManualClock,

    // Collaborator traits
    MasterClock,
    MediaTransport,
    RenderBackend,
    // Geometry
    Rotation,
    // Configuration
    SourceConfig,
    SourceId,
    SourceKind,
    SpatialParams,
    TimeWindow,
    Vector3,
};

// Scene scheduling
pub use sfera_scene::{DriftPolicy, ListenerFeed, Scheduler, SourceInfo};

/// Deterministic in-memory collaborators (recording renderer, scripted
/// transport, manual clock) for tests and prototyping.
pub use sfera_scene::testing;

mod builder;
mod engine;
mod error;
mod transport;

pub use builder::SferaEngineBuilder;
pub use engine::{SferaEngine, PERIODIC_CHECK_INTERVAL};
pub use error::{Error, Result};
pub use transport::TransportControl;

/// Convenience prelude for common imports
pub mod prelude {
    // Main engine
    pub use crate::{SferaEngine, SferaEngineBuilder, TransportControl, PERIODIC_CHECK_INTERVAL};

    // Essential kernel types
    pub use crate::core::{
        Attribute, ManualClock, MasterClock, MediaTransport, RenderBackend, Rotation,
        SourceConfig, SourceId, TimeWindow, Vector3,
    };

    // Scheduling
    pub use crate::scene::{DriftPolicy, ListenerFeed, SourceInfo};
}
