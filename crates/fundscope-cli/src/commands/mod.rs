//! CLI command implementations.

pub mod summarize;

pub use summarize::SummarizeArgs;

/// Configuration used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.json";
