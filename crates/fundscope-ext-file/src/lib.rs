//! # Fundscope Ext File
//!
//! File-based inputs for Fundscope:
//! - CSV portfolio source (`fund`, `amount` columns, `#` comments)
//! - JSON fund property configuration source
//!
//! Missing files load as empty input so a run can still report what it can.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod portfolio;

pub use config::*;
pub use error::{LoadError, LoadResult};
pub use portfolio::*;

use std::path::Path;

use fundscope_core::{FundPropertyConfig, PortfolioRecord};

/// Read portfolio records from a CSV file.
pub fn read_portfolio(path: impl AsRef<Path>) -> LoadResult<Vec<PortfolioRecord>> {
    CsvPortfolioSource::new(path).load()
}

/// Read a fund property configuration from a JSON file.
pub fn read_config(path: impl AsRef<Path>) -> LoadResult<FundPropertyConfig> {
    JsonConfigSource::new(path).load()
}
