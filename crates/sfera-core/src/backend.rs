//! Collaborator interfaces the scheduler is parameterized by.
//!
//! The scheduler never decodes, mixes, or owns media: it talks to an external
//! spatial renderer and to one media transport per source through the narrow
//! traits below, and reads time from a master clock it does not control. All
//! calls are fire-and-forget commands issued from the scheduling thread; the
//! implementations are assumed non-reentrant and must not be invoked from
//! anywhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, SourceKind, Vector3};

/// Stable identity of a registered source.
///
/// Allocated in insertion order at registration; monotonic, never reused for
/// the lifetime of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(u32);

impl SourceId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source #{}", self.0)
    }
}

/// The single time authority, owned by the host video/transport subsystem.
///
/// Read-only to the scheduler. Implementations must be callable from the
/// scheduling thread while the host mutates the clock elsewhere, hence
/// `Send + Sync`.
pub trait MasterClock: Send + Sync {
    /// Current master time in seconds.
    fn current_time(&self) -> f64;

    /// Whether the master timeline is advancing.
    fn is_playing(&self) -> bool;
}

/// Transport control for one source's media element.
///
/// `current_time` reports clip-local seconds: elapsed time since the clip's
/// own start, unrelated to the master clock.
pub trait MediaTransport: Send {
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn seek(&mut self, seconds: f64) -> Result<()>;
    fn current_time(&self) -> f64;
    fn is_paused(&self) -> bool;
}

/// The spatial audio renderer consuming scheduler output.
///
/// Whether the implementation keeps one spatializer per source or a shared
/// one is its own resource policy; the scheduler addresses everything per
/// [`SourceId`] and assumes neither topology.
pub trait RenderBackend: Send {
    /// Provision renderer-side resources for a new source. Called during
    /// registration; on error the source is not added.
    fn attach_source(&mut self, id: SourceId, kind: SourceKind) -> Result<()>;

    /// Release renderer-side resources. Called at scheduler teardown.
    fn detach_source(&mut self, id: SourceId);

    fn set_gain(&mut self, id: SourceId, gain: f32) -> Result<()>;

    /// Point-source placement; only issued for positional sources.
    fn set_position(&mut self, id: SourceId, position: Vector3) -> Result<()>;

    /// Sound-field rotation, column-major 4x4; only issued for ambisonic
    /// sources.
    fn set_rotation_matrix(&mut self, id: SourceId, matrix: [f32; 16]) -> Result<()>;

    /// Scene-wide output gain applied after per-source gains.
    fn set_master_gain(&mut self, gain: f32) -> Result<()>;
}
