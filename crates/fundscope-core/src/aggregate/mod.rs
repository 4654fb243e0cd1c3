//! Portfolio aggregation.
//!
//! Aggregation runs in two passes:
//!
//! 1. [`PortfolioSummary`] consolidates records into one amount per fund
//! 2. [`summarize_portfolio`] weights each fund by its configured properties
//!
//! [`summarize`] chains both.

mod exposure;
mod summary;

pub use exposure::{
    summarize, summarize_portfolio, summarize_strict, ExposureRow, ExposureSummary, ResultSet,
};
pub use summary::PortfolioSummary;
