//! Per-source scheduling records.

use sfera_core::{
    Attribute, MediaTransport, Rotation, SourceConfig, SourceId, SourceKind, SpatialParams,
    TimeWindow, Vector3,
};

/// Values most recently pushed to the renderer for one source.
///
/// Comparing against these lets a tick skip renderer calls whose inputs did
/// not move. Purely an optimization: losing the cache costs redundant calls,
/// never correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct AppliedParams {
    pub gain: Option<f32>,
    pub position: Option<Vector3>,
    /// Effective (listener-composed) rotation behind the last emitted matrix.
    pub rotation: Option<Rotation>,
}

/// One registered audio clip and everything the scheduler tracks for it.
///
/// Records live for the scheduler's whole session; there is no per-source
/// removal, only whole-scheduler teardown.
pub(crate) struct SourceState {
    pub id: SourceId,
    pub name: String,
    pub window: TimeWindow,
    pub volume: Attribute<f32>,
    pub spatial: SpatialParams,
    pub transport: Box<dyn MediaTransport>,
    /// Last derived window membership. Informational between ticks; every
    /// tick re-derives it from scratch because seeks move `now` arbitrarily.
    pub active: bool,
    pub last_applied: AppliedParams,
    /// Manual gain override. Effective only while the configured volume is
    /// static; ramped volumes recompute every tick and shrug it off.
    pub volume_override: Option<f32>,
}

impl SourceState {
    pub fn new(id: SourceId, config: SourceConfig, transport: Box<dyn MediaTransport>) -> Self {
        let name = config.display_name().to_owned();
        Self {
            id,
            name,
            window: config.effective_window(),
            volume: config.volume,
            spatial: config.spatial,
            transport,
            active: false,
            last_applied: AppliedParams::default(),
            volume_override: None,
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.spatial.kind()
    }

    /// Gain to emit at master time `now`.
    pub fn effective_volume(&self, now: f64) -> f32 {
        match (&self.volume, self.volume_override) {
            (Attribute::Static(_), Some(overridden)) => overridden,
            _ => self.volume.value_at(self.window, now),
        }
    }

    /// Discrepancy between the transport's reported clip time and where the
    /// master clock says the clip should be.
    pub fn drift(&self, now: f64) -> f64 {
        (now - (self.window.start + self.transport.current_time())).abs()
    }
}

/// Diagnostic snapshot of one source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceInfo {
    pub id: SourceId,
    pub name: String,
    pub kind: SourceKind,
    pub active: bool,
    /// Clip-local transport position, seconds.
    pub clip_time: f64,
    /// Last gain pushed to the renderer, if any was.
    pub gain: Option<f32>,
}

impl SourceState {
    pub fn info(&self) -> SourceInfo {
        SourceInfo {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind(),
            active: self.active,
            clip_time: self.transport.current_time(),
            gain: self.last_applied.gain,
        }
    }
}
