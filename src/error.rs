//! Centralized error type for the sfera umbrella crate.
//!
//! Wraps member-crate errors so `?` propagates naturally across crate
//! boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sfera_core::Error),

    #[error(transparent)]
    Scene(#[from] sfera_scene::Error),

    #[error("Engine builder: {0}")]
    Builder(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
