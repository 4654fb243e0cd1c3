//! # Fundscope Core
//!
//! Weighted exposure aggregation for fund portfolios.
//!
//! A portfolio is a list of `(fund, amount)` records. A property
//! configuration maps each fund to a breakdown by property type (asset class,
//! region, ...) and property name, with a percentage for each name. This
//! crate consolidates the records per fund, multiplies every fund amount by
//! its configured percentages and accumulates the result by property.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O; callers supply parsed records and configuration
//! - **Open schema**: property types and names are whatever the configuration holds
//! - **Insertion order**: results are reported in the order they were discovered
//! - **Tolerant by default**: non-numeric inputs become `NaN` or are skipped;
//!   [`summarize_strict`] rejects them instead
//!
//! ## Quick Start
//!
//! ```rust
//! use fundscope_core::prelude::*;
//!
//! let records = vec![
//!     PortfolioRecord::new("VTSAX", "6000"),
//!     PortfolioRecord::new("VBTLX", "4000"),
//!     PortfolioRecord::new("CASH", "500"),
//! ];
//!
//! let config = FundPropertyConfig::new()
//!     .with_weight("VTSAX", "Asset Class", "Equity", 1.0)
//!     .with_weight("VBTLX", "Asset Class", "Bond", 1.0);
//!
//! let summary = summarize(&records, &config);
//! assert_eq!(summary.total, 10500.0);
//! assert_eq!(summary.unmatched, vec!["CASH".to_string()]);
//!
//! let equity = summary.properties["Asset Class"]["Equity"];
//! assert_eq!(format_percentage(equity, summary.total), "57.1%");
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregate`] - Fund consolidation and weighted exposure
//! - [`format`] - Fixed-point rendering of amounts and percentages
//! - [`parse`] - Lenient numeric parsing
//! - [`types`] - Portfolio records and property configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod error;
pub mod format;
pub mod parse;
pub mod types;

pub use error::{ExposureError, ExposureResult};

pub use aggregate::{
    summarize, summarize_portfolio, summarize_strict, ExposureRow, ExposureSummary,
    PortfolioSummary, ResultSet,
};
pub use format::{format_amount, format_percentage, to_fixed};
pub use parse::parse_lenient;
pub use types::{FundProperties, FundPropertyConfig, PortfolioRecord, PropertyBreakdown, PropertyWeight};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{
        summarize, summarize_portfolio, summarize_strict, ExposureRow, ExposureSummary,
        PortfolioSummary,
    };
    pub use crate::error::{ExposureError, ExposureResult};
    pub use crate::format::{format_amount, format_percentage};
    pub use crate::types::{FundPropertyConfig, PortfolioRecord, PropertyWeight};
}
