//! Error types for sfera-scene.

use sfera_core::SourceId;
use thiserror::Error;

/// Error type for scene scheduling operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sfera_core::Error),

    #[error("Unknown source: {0}")]
    UnknownSource(SourceId),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
