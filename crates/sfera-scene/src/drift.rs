//! Drift thresholds for master/transport phase lock.

/// Hard-correction thresholds, in seconds of master/transport discrepancy.
///
/// Two thresholds coexist on purpose: the per-frame path corrects early at
/// `continuous`, while the low-frequency periodic check tolerates up to
/// `periodic` before reseeking. Correction is always a hard seek of the
/// transport to the expected clip-local time, never a playback-rate
/// adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftPolicy {
    /// Threshold for the continuous per-frame sync path.
    pub continuous: f64,
    /// Threshold for the lenient periodic check (~500 ms cadence).
    pub periodic: f64,
}

impl Default for DriftPolicy {
    fn default() -> Self {
        Self {
            continuous: 0.10,
            periodic: 0.15,
        }
    }
}
