//! Weighted exposure of a portfolio by configured fund properties.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::PortfolioSummary;
use crate::error::{ExposureError, ExposureResult};
use crate::types::{FundPropertyConfig, PortfolioRecord};

/// Property type → property name → accumulated weighted amount.
pub type ResultSet = IndexMap<String, IndexMap<String, f64>>;

/// Outcome of aggregating a portfolio against a property configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExposureSummary {
    /// Weighted amounts by property type and property name.
    pub properties: ResultSet,

    /// Sum of every fund amount, matched or not.
    pub total: f64,

    /// Funds held in the portfolio with no configuration entry.
    pub unmatched: Vec<String>,
}

/// One flattened line of an [`ExposureSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureRow {
    /// Property type, e.g. "Asset Class".
    pub property_type: String,
    /// Property name, e.g. "Equity".
    pub property_name: String,
    /// Weighted amount.
    pub amount: f64,
    /// `amount / total` as a fraction (not scaled to 100).
    pub share: f64,
}

impl ExposureSummary {
    /// Returns the weighted amounts by property type and name.
    #[must_use]
    pub fn properties(&self) -> &ResultSet {
        &self.properties
    }

    /// Returns the portfolio total.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Returns the unmatched funds in discovery order.
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Returns the property types in the order they were first seen.
    pub fn property_types(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Returns the breakdown for a single property type.
    #[must_use]
    pub fn property(&self, property_type: &str) -> Option<&IndexMap<String, f64>> {
        self.properties.get(property_type)
    }

    /// Flattens the result set into display-ordered rows.
    #[must_use]
    pub fn rows(&self) -> Vec<ExposureRow> {
        self.properties
            .iter()
            .flat_map(|(property_type, names)| {
                names.iter().map(move |(name, amount)| ExposureRow {
                    property_type: property_type.clone(),
                    property_name: name.clone(),
                    amount: *amount,
                    share: amount / self.total,
                })
            })
            .collect()
    }

    /// Returns a copy keeping only one property type.
    ///
    /// The total and the unmatched funds are left untouched.
    #[must_use]
    pub fn filtered(&self, property_type: &str) -> Self {
        let properties = self
            .properties
            .iter()
            .filter(|(name, _)| name.as_str() == property_type)
            .map(|(name, breakdown)| (name.clone(), breakdown.clone()))
            .collect();

        Self {
            properties,
            total: self.total,
            unmatched: self.unmatched.clone(),
        }
    }

    /// Returns true if no property was accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Aggregates portfolio records against a fund property configuration.
///
/// Duplicate funds are consolidated first. Every fund amount counts toward
/// the total; funds with a configuration entry then contribute
/// `amount × weight` to each configured property, while the rest are listed
/// as unmatched. A weighted contribution is skipped when either the amount
/// or the weight is `NaN`, but the property still appears with its current
/// value (0 if nothing was added).
///
/// # Example
///
/// ```rust
/// use fundscope_core::{summarize, FundPropertyConfig, PortfolioRecord};
///
/// let records = vec![
///     PortfolioRecord::new("A", "100"),
///     PortfolioRecord::new("A", "50"),
/// ];
/// let config = FundPropertyConfig::new()
///     .with_weight("A", "Class", "Equity", 0.6)
///     .with_weight("A", "Class", "Bond", 0.4);
///
/// let summary = summarize(&records, &config);
/// assert_eq!(summary.total, 150.0);
/// assert_eq!(summary.properties["Class"]["Equity"], 90.0);
/// assert_eq!(summary.properties["Class"]["Bond"], 60.0);
/// ```
#[must_use]
pub fn summarize(records: &[PortfolioRecord], config: &FundPropertyConfig) -> ExposureSummary {
    let portfolio = PortfolioSummary::from_records(records);
    summarize_portfolio(&portfolio, config)
}

/// Aggregates an already consolidated portfolio.
#[must_use]
pub fn summarize_portfolio(
    portfolio: &PortfolioSummary,
    config: &FundPropertyConfig,
) -> ExposureSummary {
    let mut properties = ResultSet::new();
    let mut unmatched = Vec::new();
    let mut total = 0.0;

    for (fund, amount) in portfolio.iter() {
        total += amount;

        let Some(fund_properties) = config.get(fund) else {
            unmatched.push(fund.to_string());
            continue;
        };

        for (property_type, breakdown) in fund_properties {
            let accumulated = properties.entry(property_type.clone()).or_default();

            for (property_name, weight) in breakdown {
                let value = accumulated.entry(property_name.clone()).or_insert(0.0);

                let percentage = weight.value();
                if percentage.is_nan() || amount.is_nan() {
                    debug!(
                        fund,
                        property_type = %property_type,
                        property_name = %property_name,
                        weight = %weight.raw(),
                        "skipping non-numeric contribution"
                    );
                    continue;
                }

                *value += percentage * amount;
            }
        }
    }

    debug!(
        funds = portfolio.len(),
        unmatched = unmatched.len(),
        property_types = properties.len(),
        "portfolio aggregated"
    );

    ExposureSummary {
        properties,
        total,
        unmatched,
    }
}

/// Aggregates like [`summarize`], but rejects non-numeric inputs.
///
/// # Errors
///
/// Returns [`ExposureError::InvalidAmount`] for the first record with a fund
/// whose amount does not parse, and [`ExposureError::InvalidWeight`] for the
/// first non-numeric weight configured for a fund held in the portfolio.
pub fn summarize_strict(
    records: &[PortfolioRecord],
    config: &FundPropertyConfig,
) -> ExposureResult<ExposureSummary> {
    for record in records {
        if let Some(fund) = record.fund() {
            if record.parsed_amount().is_nan() {
                return Err(ExposureError::invalid_amount(fund, record.amount.as_deref()));
            }
        }
    }

    let portfolio = PortfolioSummary::from_records(records);

    for (fund, _) in portfolio.iter() {
        let Some(fund_properties) = config.get(fund) else {
            continue;
        };
        for (property_type, breakdown) in fund_properties {
            for (property_name, weight) in breakdown {
                if !weight.is_numeric() {
                    return Err(ExposureError::invalid_weight(
                        fund,
                        property_type,
                        property_name,
                        weight.raw(),
                    ));
                }
            }
        }
    }

    Ok(summarize_portfolio(&portfolio, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn class_config() -> FundPropertyConfig {
        FundPropertyConfig::new()
            .with_weight("A", "Class", "Equity", 0.6)
            .with_weight("A", "Class", "Bond", 0.4)
    }

    #[test]
    fn test_reference_example() {
        let records = vec![PortfolioRecord::new("A", "100"), PortfolioRecord::new("A", "50")];
        let summary = summarize(&records, &class_config());

        assert_relative_eq!(summary.total, 150.0);
        assert_relative_eq!(summary.properties["Class"]["Equity"], 90.0);
        assert_relative_eq!(summary.properties["Class"]["Bond"], 60.0);
        assert!(summary.unmatched.is_empty());
    }

    #[test]
    fn test_unmatched_fund_only_counts_toward_total() {
        let records = vec![
            PortfolioRecord::new("A", "100"),
            PortfolioRecord::new("X", "40"),
            PortfolioRecord::new("X", "10"),
        ];
        let summary = summarize(&records, &class_config());

        assert_relative_eq!(summary.total, 150.0);
        assert_eq!(summary.unmatched, vec!["X".to_string()]);
        assert_relative_eq!(summary.properties["Class"]["Equity"], 60.0);
        assert_relative_eq!(summary.properties["Class"]["Bond"], 40.0);
    }

    #[test]
    fn test_empty_config_leaves_everything_unmatched() {
        let records = vec![PortfolioRecord::new("A", "1"), PortfolioRecord::new("B", "2")];
        let summary = summarize(&records, &FundPropertyConfig::new());

        assert!(summary.is_empty());
        assert_relative_eq!(summary.total, 3.0);
        assert_eq!(summary.unmatched, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[], &class_config());
        assert_eq!(summary.total, 0.0);
        assert!(summary.total.is_sign_positive());
        assert!(summary.properties.is_empty());
        assert!(summary.unmatched.is_empty());
    }

    #[test]
    fn test_non_numeric_weight_is_skipped_but_listed() {
        let config = FundPropertyConfig::from_json(json!({
            "A": {"Class": {"Equity": "sixty", "Bond": "0.4", "Cash": null}}
        }));
        let summary = summarize(&[PortfolioRecord::new("A", "100")], &config);

        let class = &summary.properties["Class"];
        assert_eq!(class["Equity"], 0.0);
        assert_relative_eq!(class["Bond"], 40.0);
        assert_eq!(class["Cash"], 0.0);
    }

    #[test]
    fn test_nan_amount_skips_weighting_but_poisons_total() {
        let records = vec![PortfolioRecord::new("A", "n/a"), PortfolioRecord::new("B", "10")];
        let config = class_config().with_weight("B", "Class", "Equity", 1.0);
        let summary = summarize(&records, &config);

        assert!(summary.total.is_nan());
        assert_eq!(summary.properties["Class"]["Bond"], 0.0);
        assert_relative_eq!(summary.properties["Class"]["Equity"], 10.0);
    }

    #[test]
    fn test_property_order_follows_first_appearance() {
        let config = FundPropertyConfig::new()
            .with_weight("B", "Region", "US", 1.0)
            .with_weight("A", "Class", "Equity", 1.0)
            .with_weight("A", "Region", "EU", 1.0);
        let records = vec![PortfolioRecord::new("A", "1"), PortfolioRecord::new("B", "1")];
        let summary = summarize(&records, &config);

        let types: Vec<_> = summary.property_types().collect();
        assert_eq!(types, vec!["Class", "Region"]);
        let regions: Vec<_> = summary.properties["Region"].keys().cloned().collect();
        assert_eq!(regions, vec!["EU", "US"]);
    }

    #[test]
    fn test_matched_fund_with_no_properties() {
        let config = FundPropertyConfig::from_json(json!({"A": {}}));
        let summary = summarize(&[PortfolioRecord::new("A", "5")], &config);
        assert!(summary.unmatched.is_empty());
        assert!(summary.properties.is_empty());
        assert_relative_eq!(summary.total, 5.0);
    }

    #[test]
    fn test_rows_and_filter() {
        let config = class_config().with_weight("A", "Region", "US", 1.0);
        let summary = summarize(&[PortfolioRecord::new("A", "200")], &config);

        let rows = summary.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].property_type, "Class");
        assert_eq!(rows[0].property_name, "Equity");
        assert_relative_eq!(rows[0].share, 0.6);
        assert_eq!(rows[2].property_type, "Region");
        assert_relative_eq!(rows[2].share, 1.0);

        let regions = summary.filtered("Region");
        assert_eq!(regions.property_types().collect::<Vec<_>>(), vec!["Region"]);
        assert_relative_eq!(regions.total, 200.0);

        assert!(summary.filtered("Sector").is_empty());
    }

    #[test]
    fn test_strict_rejects_bad_amount() {
        let records = vec![PortfolioRecord::new("A", "10"), PortfolioRecord::new("A", "ten")];
        let err = summarize_strict(&records, &class_config()).unwrap_err();
        assert_eq!(err, ExposureError::invalid_amount("A", Some("ten")));
    }

    #[test]
    fn test_strict_rejects_bad_weight_of_held_fund_only() {
        let config = class_config().with_weight("Z", "Class", "Equity", "?");
        let records = vec![PortfolioRecord::new("A", "10")];
        assert!(summarize_strict(&records, &config).is_ok());

        let config = class_config().with_weight("A", "Region", "US", "?");
        let err = summarize_strict(&records, &config).unwrap_err();
        assert!(matches!(err, ExposureError::InvalidWeight { ref property_name, .. } if property_name == "US"));
    }

    #[test]
    fn test_strict_matches_lenient_on_clean_input() {
        let records = vec![
            PortfolioRecord::new("A", "100"),
            PortfolioRecord::without_fund("x"),
            PortfolioRecord::new("B", "5"),
        ];
        let lenient = summarize(&records, &class_config());
        let strict = summarize_strict(&records, &class_config()).unwrap();
        assert_eq!(lenient, strict);
    }
}
