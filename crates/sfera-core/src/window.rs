//! Master-clock time windows gating source activation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The interval of master-clock time (seconds) during which a source is
/// eligible to play.
///
/// `end == f64::INFINITY` means "active for the whole timeline" and is the
/// window used when a source is registered without timing. Both endpoints are
/// inclusive: the interpolator is exactly endpoint-valued at `start` and
/// `end`, so containment at the boundaries is safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    /// Build a validated window. `start` must be finite and non-negative,
    /// `end` strictly greater (or infinite).
    pub fn new(start: f64, end: f64) -> Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Window covering the whole timeline from `start` onward.
    pub fn unbounded_from(start: f64) -> Result<Self> {
        Self::new(start, f64::INFINITY)
    }

    /// Window covering the entire timeline.
    pub fn whole() -> Self {
        Self {
            start: 0.0,
            end: f64::INFINITY,
        }
    }

    /// Re-check the invariants. Used at registration so that windows arriving
    /// through deserialized configs get the same treatment as constructed
    /// ones.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || self.start < 0.0 || self.end.is_nan() {
            return Err(Error::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        if self.end == self.start {
            return Err(Error::DegenerateWindow(self.start));
        }
        if self.end < self.start {
            return Err(Error::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Inclusive containment test, re-evaluated every tick.
    pub fn contains(&self, now: f64) -> bool {
        now >= self.start && now <= self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Clip-local time for a master-clock position: seconds since window
    /// entry, clamped at zero for positions before the window.
    pub fn local_time(&self, now: f64) -> f64 {
        (now - self.start).max(0.0)
    }
}
