//! The spatio-temporal source scheduler.
//!
//! Owns the ordered source collection and, on every tick, re-derives each
//! source's activation from the master clock, interpolates its parameters,
//! issues transport commands, and keeps clip playback phase-locked to the
//! master timeline.

use std::sync::Arc;

use arc_swap::ArcSwap;
use sfera_core::{
    Error as CoreError, MasterClock, MediaTransport, RenderBackend, Rotation, SourceConfig,
    SourceId, SpatialParams,
};

use crate::source::{SourceInfo, SourceState};
use crate::{DriftPolicy, Error, ListenerFeed, Result};

/// Per-frame scheduler for spatial audio sources synchronized to a master
/// video clock.
///
/// Driven from outside: the host calls [`tick`](Self::tick) once per rendered
/// frame and [`run_periodic_check`](Self::run_periodic_check) on a slow timer
/// (~500 ms). Neither call blocks; every renderer and transport interaction
/// is a fire-and-forget command. All mutation happens on the calling thread,
/// so the scheduler itself carries no locks.
pub struct Scheduler {
    clock: Arc<dyn MasterClock>,
    renderer: Box<dyn RenderBackend>,
    sources: Vec<SourceState>,
    next_id: u32,
    orientation: Arc<ArcSwap<Rotation>>,
    drift_policy: DriftPolicy,
    shut_down: bool,
}

impl Scheduler {
    pub fn new(clock: Arc<dyn MasterClock>, renderer: Box<dyn RenderBackend>) -> Self {
        Self {
            clock,
            renderer,
            sources: Vec::new(),
            next_id: 0,
            orientation: Arc::new(ArcSwap::new(Arc::new(Rotation::IDENTITY))),
            drift_policy: DriftPolicy::default(),
            shut_down: false,
        }
    }

    pub fn with_drift_policy(mut self, policy: DriftPolicy) -> Self {
        self.drift_policy = policy;
        self
    }

    pub fn drift_policy(&self) -> DriftPolicy {
        self.drift_policy
    }

    pub fn clock(&self) -> &Arc<dyn MasterClock> {
        &self.clock
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Register one audio clip.
    ///
    /// Validates the configuration, provisions the renderer side, and only
    /// then allocates the next id. On any failure the source is not added
    /// and the error is reported synchronously.
    pub fn register(
        &mut self,
        config: SourceConfig,
        transport: Box<dyn MediaTransport>,
    ) -> Result<SourceId> {
        config.validate()?;

        let id = SourceId::new(self.next_id);
        let kind = config.spatial.kind();
        self.renderer.attach_source(id, kind)?;
        self.next_id += 1;

        let state = SourceState::new(id, config, transport);
        tracing::info!("Registered {} ({:?}): {}", state.id, kind, state.name);
        self.sources.push(state);
        Ok(id)
    }

    /// Advance every source through the activation state machine.
    ///
    /// Callable at arbitrary, irregular intervals; a repeated call with the
    /// same `now` is a no-op beyond the first (transports are already
    /// aligned, parameter emission is change-suppressed). Per-source
    /// failures are logged and do not halt the remaining sources.
    pub fn tick(&mut self, now: f64) {
        if self.shut_down {
            return;
        }

        let master_playing = self.clock.is_playing();
        let orientation = **self.orientation.load();
        let policy = self.drift_policy;
        let renderer = self.renderer.as_mut();

        for source in &mut self.sources {
            if let Err(e) = tick_source(renderer, source, now, master_playing, orientation, policy)
            {
                tracing::warn!("{} ({}): {}", source.id, source.name, e);
            }
        }
    }

    /// Lenient drift pass, host-driven at a low fixed cadence.
    ///
    /// Independent of the per-frame tick and safe to interleave with it in
    /// any order: it only reseeks transports that are already rolling inside
    /// their window, never changes activation.
    pub fn run_periodic_check(&mut self) {
        if self.shut_down || !self.clock.is_playing() {
            return;
        }

        let now = self.clock.current_time();
        for source in &mut self.sources {
            if !source.window.contains(now) || source.transport.is_paused() {
                continue;
            }
            let drift = source.drift(now);
            if drift > self.drift_policy.periodic {
                tracing::debug!("Resyncing {}: drift {:.3}s", source.id, drift);
                if let Err(e) = source.transport.seek(source.window.local_time(now)) {
                    tracing::warn!("Drift correction failed for {}: {}", source.id, e);
                }
            }
        }
    }

    /// Start every source whose window contains the current master time,
    /// aligning clip-local positions first.
    pub fn play_all(&mut self) {
        let now = self.clock.current_time();
        for source in &mut self.sources {
            let local = source.window.local_time(now);
            if let Err(e) = source.transport.seek(local) {
                tracing::warn!("Seek failed for {}: {}", source.id, e);
                continue;
            }
            if source.window.contains(now) {
                source.active = true;
                if let Err(e) = source.transport.play() {
                    tracing::warn!("Play failed for {}: {}", source.id, e);
                }
            }
        }
    }

    /// Pause every source, leaving clip-local positions untouched.
    pub fn pause_all(&mut self) {
        for source in &mut self.sources {
            if let Err(e) = source.transport.pause() {
                tracing::warn!("Pause failed for {}: {}", source.id, e);
            }
        }
    }

    /// Pause every source and rewind clip-local time to zero. The only path
    /// that force-rewinds; window exits never do.
    pub fn stop_all(&mut self) {
        for source in &mut self.sources {
            if let Err(e) = source
                .transport
                .pause()
                .and_then(|()| source.transport.seek(0.0))
            {
                tracing::warn!("Stop failed for {}: {}", source.id, e);
            }
            source.active = false;
        }
    }

    /// Re-align every transport to a new master time.
    ///
    /// Only moves clip positions; activation and play state are re-derived
    /// by the next `tick`, which must follow before any time-dependent
    /// computation is trusted.
    pub fn seek_all(&mut self, time: f64) {
        for source in &mut self.sources {
            if let Err(e) = source.transport.seek(source.window.local_time(time)) {
                tracing::warn!("Seek failed for {}: {}", source.id, e);
            }
        }
    }

    /// Overwrite the listener orientation; effective on the next tick.
    pub fn set_global_orientation(&self, rotation: Rotation) {
        self.orientation.store(Arc::new(rotation));
    }

    pub fn global_orientation(&self) -> Rotation {
        **self.orientation.load()
    }

    /// A feed handle sharing this scheduler's orientation cell.
    pub fn listener_feed(&self) -> ListenerFeed {
        ListenerFeed::new(Arc::clone(&self.orientation))
    }

    /// Manual per-source gain, bypassing interpolation.
    ///
    /// Applied to the renderer immediately. For sources with a static
    /// volume the override persists across ticks; a ramped volume recomputes
    /// on the next tick and the override is transient.
    pub fn set_source_volume(&mut self, id: SourceId, gain: f32) -> Result<()> {
        if !gain.is_finite() || gain < 0.0 {
            return Err(CoreError::InvalidGain(gain).into());
        }
        let renderer = self.renderer.as_mut();
        let source = self
            .sources
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::UnknownSource(id))?;

        source.volume_override = Some(gain);
        renderer.set_gain(id, gain)?;
        source.last_applied.gain = Some(gain);
        Ok(())
    }

    /// Scene-wide output gain.
    pub fn set_master_volume(&mut self, gain: f32) -> Result<()> {
        if !gain.is_finite() || gain < 0.0 {
            return Err(CoreError::InvalidGain(gain).into());
        }
        self.renderer.set_master_gain(gain)?;
        Ok(())
    }

    /// Diagnostic snapshot of every source, in registration order.
    pub fn sources_info(&self) -> Vec<SourceInfo> {
        self.sources.iter().map(SourceState::info).collect()
    }

    /// Tear the scene down: pause everything, release renderer resources,
    /// drop the transport handles. Nothing is retried afterwards; further
    /// ticks are no-ops.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        for source in &mut self.sources {
            if let Err(e) = source.transport.pause() {
                tracing::debug!("Pause on teardown failed for {}: {}", source.id, e);
            }
            self.renderer.detach_source(source.id);
        }
        self.sources.clear();
        tracing::info!("Scheduler shut down");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One source's share of a tick: activation, transport alignment, parameter
/// emission, continuous drift correction.
fn tick_source(
    renderer: &mut dyn RenderBackend,
    source: &mut SourceState,
    now: f64,
    master_playing: bool,
    orientation: Rotation,
    policy: DriftPolicy,
) -> Result<()> {
    if !source.window.contains(now) {
        // Outside the window (possibly via a backward seek): pause where the
        // clip stands. Rewinding is reserved for explicit stops.
        source.active = false;
        if !source.transport.is_paused() {
            source.transport.pause()?;
        }
        return Ok(());
    }

    let was_active = source.active;
    source.active = true;

    if master_playing && source.transport.is_paused() {
        // Window entry (or master resume): clip-local time starts counting
        // from window entry, so align before starting.
        source.transport.seek(source.window.local_time(now))?;
        source.transport.play()?;
        if !was_active {
            tracing::debug!("{} active at {:.3}s", source.id, now);
        }
    } else if !master_playing && !source.transport.is_paused() {
        source.transport.pause()?;
    } else if master_playing && was_active {
        // Steady state: keep the clip phase-locked. Failure here is not
        // fatal; the drift persists until a later correction lands.
        let drift = source.drift(now);
        if drift > policy.continuous {
            if let Err(e) = source.transport.seek(source.window.local_time(now)) {
                tracing::warn!("Drift correction failed for {}: {}", source.id, e);
            }
        }
    }

    emit_params(renderer, source, now, orientation)
}

/// Push interpolated gain and spatial parameters, skipping values identical
/// to the last emission.
fn emit_params(
    renderer: &mut dyn RenderBackend,
    source: &mut SourceState,
    now: f64,
    orientation: Rotation,
) -> Result<()> {
    let gain = source.effective_volume(now);
    if source.last_applied.gain != Some(gain) {
        renderer.set_gain(source.id, gain)?;
        source.last_applied.gain = Some(gain);
    }

    match &source.spatial {
        SpatialParams::Positional { position } => {
            let pos = position.value_at(source.window, now);
            if source.last_applied.position != Some(pos) {
                renderer.set_position(source.id, pos)?;
                source.last_applied.position = Some(pos);
            }
        }
        SpatialParams::Ambisonic { rotation } => {
            let effective = orientation.compose(rotation.value_at(source.window, now));
            if source.last_applied.rotation != Some(effective) {
                renderer.set_rotation_matrix(source.id, effective.to_matrix4())?;
                source.last_applied.rotation = Some(effective);
            }
        }
    }

    Ok(())
}
