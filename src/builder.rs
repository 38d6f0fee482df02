//! Builder for configuring and constructing a `SferaEngine`.

use std::sync::Arc;

use sfera_core::{MasterClock, RenderBackend};
use sfera_scene::{DriftPolicy, Scheduler};

use crate::{Error, Result, SferaEngine};

/// Both collaborators are required: the clock the host video subsystem owns,
/// and the renderer that turns scheduler output into sound. Master volume
/// and drift thresholds have usable defaults.
///
/// # Example
///
/// ```ignore
/// use sfera::prelude::*;
///
/// let engine = SferaEngine::builder()
///     .clock(video_clock)
///     .renderer(Box::new(omnitone_bridge))
///     .master_volume(0.5)
///     .build()?;
/// ```
pub struct SferaEngineBuilder {
    clock: Option<Arc<dyn MasterClock>>,
    renderer: Option<Box<dyn RenderBackend>>,
    master_volume: f32,
    drift_policy: DriftPolicy,
}

impl Default for SferaEngineBuilder {
    fn default() -> Self {
        Self {
            clock: None,
            renderer: None,
            master_volume: 1.0,
            drift_policy: DriftPolicy::default(),
        }
    }
}

impl SferaEngineBuilder {
    /// The master clock; the single time authority for the scene.
    pub fn clock(mut self, clock: Arc<dyn MasterClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// The spatial renderer receiving gain/position/rotation commands.
    pub fn renderer(mut self, renderer: Box<dyn RenderBackend>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Initial scene-wide output gain. Default: 1.0.
    pub fn master_volume(mut self, gain: f32) -> Self {
        self.master_volume = gain;
        self
    }

    /// Override the drift-correction thresholds.
    pub fn drift_policy(mut self, policy: DriftPolicy) -> Self {
        self.drift_policy = policy;
        self
    }

    pub fn build(self) -> Result<SferaEngine> {
        let clock = self
            .clock
            .ok_or(Error::Builder("a master clock is required"))?;
        let renderer = self
            .renderer
            .ok_or(Error::Builder("a render backend is required"))?;

        let mut scheduler =
            Scheduler::new(Arc::clone(&clock), renderer).with_drift_policy(self.drift_policy);
        // Validates the gain and pushes it to the renderer up front.
        scheduler.set_master_volume(self.master_volume)?;

        Ok(SferaEngine::from_parts(scheduler, clock, self.master_volume))
    }
}
