//! Portfolio records as read from a holdings export.

use serde::{Deserialize, Serialize};

use crate::parse::parse_lenient;

/// A single row of a portfolio export.
///
/// Both fields are kept exactly as they appeared in the source. A record
/// without a fund is ignored during aggregation; the amount is parsed
/// leniently when the record is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    /// Fund identifier (ticker or name).
    pub fund: Option<String>,

    /// Raw amount text.
    pub amount: Option<String>,
}

impl PortfolioRecord {
    /// Creates a record with both fields present.
    #[must_use]
    pub fn new(fund: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            fund: Some(fund.into()),
            amount: Some(amount.into()),
        }
    }

    /// Creates a record with no fund, which aggregation skips.
    #[must_use]
    pub fn without_fund(amount: impl Into<String>) -> Self {
        Self {
            fund: None,
            amount: Some(amount.into()),
        }
    }

    /// Creates a record with an absent amount.
    #[must_use]
    pub fn without_amount(fund: impl Into<String>) -> Self {
        Self {
            fund: Some(fund.into()),
            amount: None,
        }
    }

    /// Returns the fund identifier, if present.
    #[must_use]
    pub fn fund(&self) -> Option<&str> {
        self.fund.as_deref()
    }

    /// Returns the parsed amount; `NaN` when absent or not numeric.
    #[must_use]
    pub fn parsed_amount(&self) -> f64 {
        self.amount.as_deref().map_or(f64::NAN, parse_lenient)
    }
}
