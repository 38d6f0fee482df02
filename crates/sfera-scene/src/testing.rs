//! Deterministic in-memory collaborators.
//!
//! A recording renderer, a scripted media transport, and a hand-driven
//! clock, for tests and for hosts prototyping scheduling without real audio
//! output. Nothing here produces sound; the renderer probe only logs the
//! commands the scheduler emits.

use std::sync::{Arc, Mutex};

use sfera_core::{
    Error as CoreError, ManualClock, MasterClock, MediaTransport, RenderBackend,
    Result as CoreResult, SourceId, SourceKind, Vector3,
};

/// One recorded renderer interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Attach(SourceId, SourceKind),
    Detach(SourceId),
    Gain(SourceId, f32),
    Position(SourceId, Vector3),
    RotationMatrix(SourceId, [f32; 16]),
    MasterGain(f32),
}

#[derive(Default)]
struct RenderLog {
    calls: Vec<RenderCall>,
    fail_next_attach: bool,
    fail_gain_for: Option<SourceId>,
}

/// Shared view of a recording renderer.
///
/// Keep the probe, hand [`backend`](Self::backend) to the scheduler, then
/// assert on [`calls`](Self::calls).
#[derive(Clone, Default)]
pub struct RenderProbe {
    log: Arc<Mutex<RenderLog>>,
}

impl RenderProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The backend half to install into a scheduler.
    pub fn backend(&self) -> ProbeBackend {
        ProbeBackend {
            log: Arc::clone(&self.log),
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.log.lock().unwrap().calls.clone()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().calls.clear();
    }

    /// Make the next `attach_source` fail, as a renderer whose decode or
    /// connect step broke.
    pub fn fail_next_attach(&self) {
        self.log.lock().unwrap().fail_next_attach = true;
    }

    /// Make every `set_gain` for one source fail until cleared.
    pub fn fail_gain_for(&self, id: SourceId) {
        self.log.lock().unwrap().fail_gain_for = Some(id);
    }

    pub fn clear_failures(&self) {
        let mut log = self.log.lock().unwrap();
        log.fail_next_attach = false;
        log.fail_gain_for = None;
    }
}

/// The [`RenderBackend`] half of a [`RenderProbe`].
pub struct ProbeBackend {
    log: Arc<Mutex<RenderLog>>,
}

impl RenderBackend for ProbeBackend {
    fn attach_source(&mut self, id: SourceId, kind: SourceKind) -> CoreResult<()> {
        let mut log = self.log.lock().unwrap();
        if log.fail_next_attach {
            log.fail_next_attach = false;
            return Err(CoreError::Renderer("attach refused".into()));
        }
        log.calls.push(RenderCall::Attach(id, kind));
        Ok(())
    }

    fn detach_source(&mut self, id: SourceId) {
        self.log.lock().unwrap().calls.push(RenderCall::Detach(id));
    }

    fn set_gain(&mut self, id: SourceId, gain: f32) -> CoreResult<()> {
        let mut log = self.log.lock().unwrap();
        if log.fail_gain_for == Some(id) {
            return Err(CoreError::Renderer(format!("gain refused for {id}")));
        }
        log.calls.push(RenderCall::Gain(id, gain));
        Ok(())
    }

    fn set_position(&mut self, id: SourceId, position: Vector3) -> CoreResult<()> {
        self.log
            .lock()
            .unwrap()
            .calls
            .push(RenderCall::Position(id, position));
        Ok(())
    }

    fn set_rotation_matrix(&mut self, id: SourceId, matrix: [f32; 16]) -> CoreResult<()> {
        self.log
            .lock()
            .unwrap()
            .calls
            .push(RenderCall::RotationMatrix(id, matrix));
        Ok(())
    }

    fn set_master_gain(&mut self, gain: f32) -> CoreResult<()> {
        self.log
            .lock()
            .unwrap()
            .calls
            .push(RenderCall::MasterGain(gain));
        Ok(())
    }
}

#[derive(Default)]
struct TransportState {
    time: f64,
    paused: bool,
    fail_commands: bool,
    seeks: u32,
    plays: u32,
    pauses: u32,
}

/// Shared view of a scripted media transport.
///
/// The clip position only moves when seeked (or via [`set_time`]
/// drift injection), so tests stay deterministic.
///
/// [`set_time`]: Self::set_time
#[derive(Clone)]
pub struct TransportProbe {
    state: Arc<Mutex<TransportState>>,
}

impl TransportProbe {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TransportState {
                paused: true,
                ..TransportState::default()
            })),
        }
    }

    /// The [`MediaTransport`] half to register with a scheduler.
    pub fn handle(&self) -> Box<dyn MediaTransport> {
        Box::new(ProbeTransport {
            state: Arc::clone(&self.state),
        })
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    pub fn time(&self) -> f64 {
        self.state.lock().unwrap().time
    }

    /// Move the clip position without a seek, simulating transport drift.
    pub fn set_time(&self, seconds: f64) {
        self.state.lock().unwrap().time = seconds;
    }

    /// Make every play/pause/seek command fail while enabled.
    pub fn fail_commands(&self, fail: bool) {
        self.state.lock().unwrap().fail_commands = fail;
    }

    pub fn seek_count(&self) -> u32 {
        self.state.lock().unwrap().seeks
    }

    pub fn play_count(&self) -> u32 {
        self.state.lock().unwrap().plays
    }

    pub fn pause_count(&self) -> u32 {
        self.state.lock().unwrap().pauses
    }
}

impl Default for TransportProbe {
    fn default() -> Self {
        Self::new()
    }
}

struct ProbeTransport {
    state: Arc<Mutex<TransportState>>,
}

impl ProbeTransport {
    fn guard(&self) -> CoreResult<std::sync::MutexGuard<'_, TransportState>> {
        let state = self.state.lock().unwrap();
        if state.fail_commands {
            return Err(CoreError::Transport("command refused".into()));
        }
        Ok(state)
    }
}

impl MediaTransport for ProbeTransport {
    fn play(&mut self) -> CoreResult<()> {
        let mut state = self.guard()?;
        state.paused = false;
        state.plays += 1;
        Ok(())
    }

    fn pause(&mut self) -> CoreResult<()> {
        let mut state = self.guard()?;
        state.paused = true;
        state.pauses += 1;
        Ok(())
    }

    fn seek(&mut self, seconds: f64) -> CoreResult<()> {
        let mut state = self.guard()?;
        state.time = seconds;
        state.seeks += 1;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.state.lock().unwrap().time
    }

    fn is_paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }
}

/// Hand-driven master clock fixture.
#[derive(Clone)]
pub struct ClockFixture {
    clock: Arc<ManualClock>,
}

impl ClockFixture {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(ManualClock::new()),
        }
    }

    /// The clock half to install into a scheduler.
    pub fn shared(&self) -> Arc<dyn MasterClock> {
        Arc::clone(&self.clock) as _
    }

    pub fn set_time(&self, seconds: f64) {
        self.clock.set_time(seconds);
    }

    pub fn set_playing(&self, playing: bool) {
        self.clock.set_playing(playing);
    }

    pub fn advance(&self, seconds: f64) {
        self.clock.advance(seconds);
    }
}

impl Default for ClockFixture {
    fn default() -> Self {
        Self::new()
    }
}
