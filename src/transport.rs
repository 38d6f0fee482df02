//! Fluent API handle for bulk source transport control.

use crate::SferaEngine;

/// Fluent handle over the scene's bulk transport commands.
///
/// Created via `engine.transport()`. Commands apply to every registered
/// source; the master clock itself belongs to the host and is not touched.
///
/// # Example
/// ```ignore
/// engine.transport()
///     .seek(42.0)
///     .play();
/// ```
pub struct TransportControl<'a> {
    engine: &'a SferaEngine,
}

impl<'a> TransportControl<'a> {
    pub(crate) fn new(engine: &'a SferaEngine) -> Self {
        Self { engine }
    }

    /// Start every source whose window contains the current master time.
    pub fn play(self) -> Self {
        self.engine.scheduler().play_all();
        self
    }

    /// Pause every source, leaving clip positions where they are.
    pub fn pause(self) -> Self {
        self.engine.scheduler().pause_all();
        self
    }

    /// Pause every source and rewind clip-local time to zero.
    pub fn stop(self) -> Self {
        self.engine.scheduler().stop_all();
        self
    }

    /// Re-align every clip to a new master time. Follow with a tick before
    /// trusting any time-dependent state.
    pub fn seek(self, time: f64) -> Self {
        self.engine.scheduler().seek_all(time);
        self
    }
}
