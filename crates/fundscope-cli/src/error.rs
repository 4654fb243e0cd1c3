//! CLI error types.

use fundscope_core::ExposureError;
use fundscope_ext_file::LoadError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Strict validation rejected an input.
    #[error("Strict validation failed: {0}")]
    Validation(#[from] ExposureError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
