//! Error types for sfera-core.

use thiserror::Error;

/// Error type for sfera-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid time window: start={start}, end={end}")]
    InvalidWindow { start: f64, end: f64 },

    #[error("Degenerate time window at {0}: start and end coincide")]
    DegenerateWindow(f64),

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("Invalid gain: {0}. Must be finite and non-negative")]
    InvalidGain(f32),

    #[error("Renderer call failed: {0}")]
    Renderer(String),

    #[error("Transport call failed: {0}")]
    Transport(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
