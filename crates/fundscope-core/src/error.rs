//! Error types for exposure aggregation.
//!
//! Aggregation itself is tolerant and never fails; these errors are only
//! produced by the strict entry points.

use thiserror::Error;

/// Result type for exposure operations.
pub type ExposureResult<T> = Result<T, ExposureError>;

/// Errors that can occur during strict aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExposureError {
    /// A portfolio amount is not a number.
    #[error("Invalid amount for fund '{fund}': {raw:?}")]
    InvalidAmount {
        /// The fund the amount belongs to.
        fund: String,
        /// The raw amount text (`None` when the field was absent).
        raw: Option<String>,
    },

    /// A configured percentage is not a number.
    #[error("Invalid weight for fund '{fund}' at {property_type}/{property_name}: {raw}")]
    InvalidWeight {
        /// The fund the weight is configured for.
        fund: String,
        /// The property type (e.g. "Asset Class").
        property_type: String,
        /// The property name (e.g. "Equity").
        property_name: String,
        /// The raw configured value.
        raw: String,
    },
}

impl ExposureError {
    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(fund: impl Into<String>, raw: Option<&str>) -> Self {
        Self::InvalidAmount {
            fund: fund.into(),
            raw: raw.map(str::to_string),
        }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub fn invalid_weight(
        fund: impl Into<String>,
        property_type: impl Into<String>,
        property_name: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::InvalidWeight {
            fund: fund.into(),
            property_type: property_type.into(),
            property_name: property_name.into(),
            raw: raw.into(),
        }
    }
}
