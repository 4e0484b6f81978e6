//! Crate error type.

use thiserror::Error;

/// Errors surfaced by [`crate::run`].
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be parsed, or help/version was requested.
    #[error(transparent)]
    Args(#[from] clap::Error),

    /// The output sink failed.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
