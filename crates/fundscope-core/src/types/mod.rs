//! Domain types for exposure aggregation.
//!
//! - [`PortfolioRecord`]: One row of a holdings export
//! - [`FundPropertyConfig`]: Fund → property type → property name → weight
//! - [`PropertyWeight`]: A configured percentage in its source form

mod config;
mod record;

pub use config::{FundProperties, FundPropertyConfig, PropertyBreakdown, PropertyWeight};
pub use record::PortfolioRecord;
