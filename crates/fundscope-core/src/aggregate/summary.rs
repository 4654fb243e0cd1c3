//! Consolidation of portfolio records into one amount per fund.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::PortfolioRecord;

/// Total amount held per fund, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioSummary {
    amounts: IndexMap<String, f64>,
}

impl PortfolioSummary {
    /// Sums the amounts of all records sharing a fund.
    ///
    /// Records without a fund are skipped. Amounts are parsed leniently and
    /// a non-numeric amount turns the fund's running sum into `NaN`.
    #[must_use]
    pub fn from_records(records: &[PortfolioRecord]) -> Self {
        let mut amounts: IndexMap<String, f64> = IndexMap::new();

        for record in records {
            let Some(fund) = record.fund() else {
                continue;
            };

            let amount = record.parsed_amount();
            if amount.is_nan() {
                debug!(fund, raw = ?record.amount, "amount is not numeric");
            }

            match amounts.get_mut(fund) {
                Some(total) => *total += amount,
                None => {
                    amounts.insert(fund.to_string(), amount);
                }
            }
        }

        Self { amounts }
    }

    /// Returns the consolidated amount for a fund.
    #[must_use]
    pub fn get(&self, fund: &str) -> Option<f64> {
        self.amounts.get(fund).copied()
    }

    /// Iterates `(fund, amount)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.amounts.iter().map(|(fund, amount)| (fund.as_str(), *amount))
    }

    /// Returns the sum of all fund amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.amounts.values().fold(0.0, |acc, amount| acc + amount)
    }

    /// Returns the number of distinct funds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if no fund was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
