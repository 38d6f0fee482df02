//! SferaEngine, the host-facing facade over the scene scheduler.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use sfera_core::{AtomicFloat, MasterClock, MediaTransport, Rotation, SourceConfig, SourceId};
use sfera_scene::{DriftPolicy, ListenerFeed, Scheduler, SourceInfo};

use crate::{Result, TransportControl};

/// Recommended cadence for [`SferaEngine::run_periodic_check`].
pub const PERIODIC_CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// One immersive audio scene bound to one master video clock.
///
/// The engine owns the scheduler behind a mutex so its two host entry
/// points, the per-frame [`tick`](Self::tick) and the low-frequency
/// [`run_periodic_check`](Self::run_periodic_check), may come from timers
/// that are not synchronized with each other. Each scene is self-contained:
/// several engines with their own clocks and renderers can coexist in one
/// process.
///
/// # Example
///
/// ```ignore
/// use sfera::prelude::*;
///
/// let clock = std::sync::Arc::new(ManualClock::new());
/// let engine = SferaEngine::builder()
///     .clock(clock.clone())
///     .renderer(Box::new(my_renderer))
///     .master_volume(0.5)
///     .build()?;
///
/// let id = engine.add_source(
///     SourceConfig::positional("clips/ducks.wav", Attribute::Static(Vector3::new(2.0, 0.0, -1.0)))
///         .with_window(TimeWindow::new(10.0, 20.0)?),
///     transport,
/// )?;
///
/// // Host frame callback:
/// engine.tick();
/// // Host 500 ms timer:
/// engine.run_periodic_check();
/// ```
pub struct SferaEngine {
    scheduler: Mutex<Scheduler>,
    clock: Arc<dyn MasterClock>,
    master_volume: AtomicFloat,
}

impl SferaEngine {
    /// Create a new engine builder.
    pub fn builder() -> crate::SferaEngineBuilder {
        crate::SferaEngineBuilder::default()
    }

    pub(crate) fn from_parts(
        scheduler: Scheduler,
        clock: Arc<dyn MasterClock>,
        master_volume: f32,
    ) -> Self {
        Self {
            scheduler: Mutex::new(scheduler),
            clock,
            master_volume: AtomicFloat::new(master_volume),
        }
    }

    pub(crate) fn scheduler(&self) -> MutexGuard<'_, Scheduler> {
        self.scheduler.lock()
    }

    /// Register one audio clip with its media transport.
    pub fn add_source(
        &self,
        config: SourceConfig,
        transport: Box<dyn MediaTransport>,
    ) -> Result<SourceId> {
        Ok(self.scheduler().register(config, transport)?)
    }

    /// Per-frame driver entry point: advance the scene to the master clock's
    /// current position.
    pub fn tick(&self) {
        let now = self.clock.current_time();
        self.scheduler().tick(now);
    }

    /// Advance the scene to an explicit master time. Mostly useful for
    /// deterministic drivers and tests.
    pub fn tick_at(&self, now: f64) {
        self.scheduler().tick(now);
    }

    /// Low-frequency driver entry point for the lenient drift check; call
    /// roughly every [`PERIODIC_CHECK_INTERVAL`].
    pub fn run_periodic_check(&self) {
        self.scheduler().run_periodic_check();
    }

    /// Fluent bulk transport control over all sources.
    pub fn transport(&self) -> TransportControl<'_> {
        TransportControl::new(self)
    }

    /// Orientation feed for the host camera; cloneable and lock-free.
    pub fn listener(&self) -> ListenerFeed {
        self.scheduler().listener_feed()
    }

    /// Overwrite the listener orientation directly (radians); effective on
    /// the next tick.
    pub fn set_orientation(&self, rotation: Rotation) {
        self.scheduler().set_global_orientation(rotation);
    }

    /// Scene-wide output gain.
    pub fn set_master_volume(&self, gain: f32) -> Result<()> {
        self.scheduler().set_master_volume(gain)?;
        self.master_volume.set(gain);
        Ok(())
    }

    /// Last master gain set on this engine. Lock-free, for UI readback.
    pub fn master_volume(&self) -> f32 {
        self.master_volume.get()
    }

    /// Manual per-source gain override, bypassing interpolation.
    pub fn set_source_volume(&self, id: SourceId, gain: f32) -> Result<()> {
        Ok(self.scheduler().set_source_volume(id, gain)?)
    }

    /// Diagnostic snapshot of every source in registration order.
    pub fn sources_info(&self) -> Vec<SourceInfo> {
        self.scheduler().sources_info()
    }

    pub fn source_count(&self) -> usize {
        self.scheduler().source_count()
    }

    pub fn clock(&self) -> &Arc<dyn MasterClock> {
        &self.clock
    }

    pub fn drift_policy(&self) -> DriftPolicy {
        self.scheduler().drift_policy()
    }

    /// Tear the scene down: pause all sources and release renderer
    /// resources. Further ticks are no-ops. Also runs on drop.
    pub fn shutdown(&self) {
        self.scheduler().shutdown();
    }
}
