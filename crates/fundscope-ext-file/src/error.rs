//! Error types for file-based sources.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading an existing input file.
///
/// A missing file is not an error; sources load it as empty input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The portfolio is not valid CSV.
    #[error("Invalid portfolio CSV in {}: {source}", path.display())]
    Csv {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// The configuration is not valid JSON.
    #[error("Invalid configuration JSON in {}: {source}", path.display())]
    Json {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a CSV error for a path.
    #[must_use]
    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a JSON error for a path.
    #[must_use]
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the file the error relates to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Csv { path, .. } | Self::Json { path, .. } => path,
        }
    }
}
