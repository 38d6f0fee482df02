//! Linear attribute interpolation over a time window.

use serde::{Deserialize, Serialize};

use crate::{Rotation, TimeWindow, Vector3};

/// Component-wise linear interpolation.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vector3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vector3 {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            z: self.z.lerp(to.z, t),
        }
    }
}

impl Lerp for Rotation {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Rotation {
            yaw: self.yaw.lerp(to.yaw, t),
            pitch: self.pitch.lerp(to.pitch, t),
            roll: self.roll.lerp(to.roll, t),
        }
    }
}

/// A source parameter that is either fixed for the whole window or ramped
/// linearly from one value to another across it.
///
/// The variant is resolved once at registration; evaluation never has to ask
/// "is an end value present" again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Attribute<T> {
    Static(T),
    Ramp { from: T, to: T },
}

impl<T: Lerp> Attribute<T> {
    pub fn is_static(&self) -> bool {
        matches!(self, Attribute::Static(_))
    }

    /// Value at window entry.
    pub fn start(&self) -> T {
        match self {
            Attribute::Static(v) => *v,
            Attribute::Ramp { from, .. } => *from,
        }
    }

    /// Evaluate at master-clock time `now`.
    ///
    /// Progress is deliberately not clamped to [0, 1]: callers only evaluate
    /// while `now` is inside `window` (activation gating guarantees it), and
    /// evaluating outside is a caller contract violation, not a runtime
    /// error. A ramp over an unbounded window has zero progress everywhere
    /// and holds its `from` value.
    pub fn value_at(&self, window: TimeWindow, now: f64) -> T {
        match self {
            Attribute::Static(v) => *v,
            Attribute::Ramp { from, to } => {
                let progress = ((now - window.start) / window.duration()) as f32;
                from.lerp(*to, progress)
            }
        }
    }
}
