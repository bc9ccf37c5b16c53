//! Error types for loading run configuration.
//!
//! Stepping and merging never fail; only reading settings from disk does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed fine but makes no sense for a run.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
