//! JSON fund property configuration source.

use std::path::{Path, PathBuf};

use fundscope_core::FundPropertyConfig;
use tracing::{debug, warn};

use crate::error::{LoadError, LoadResult};

// =============================================================================
// JSON CONFIG SOURCE
// =============================================================================

/// JSON-based fund property configuration source.
///
/// The document maps fund → property type → property name → percentage.
/// Key order is preserved and malformed nesting is tolerated (see
/// [`FundPropertyConfig::from_json`]).
#[derive(Debug, Clone)]
pub struct JsonConfigSource {
    file_path: PathBuf,
}

impl JsonConfigSource {
    /// Create a new JSON configuration source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load the configuration from the file.
    ///
    /// A missing file loads as an empty configuration.
    pub fn load(&self) -> LoadResult<FundPropertyConfig> {
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "configuration file not found; using empty configuration");
            return Ok(FundPropertyConfig::new());
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| LoadError::io(&self.file_path, e))?;
        let config = parse_config(&content).map_err(|e| LoadError::json(&self.file_path, e))?;

        debug!(
            path = %self.file_path.display(),
            funds = config.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Parses a configuration document.
pub fn parse_config(content: &str) -> Result<FundPropertyConfig, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(FundPropertyConfig::from_json(value))
}
