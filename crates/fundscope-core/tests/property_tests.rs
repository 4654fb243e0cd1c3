//! Property-based tests for aggregation invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Repeated funds consolidate to the sum of their amounts
//! - The total equals the sum of consolidated amounts
//! - A matched fund's weighted amounts add up to its declared weights
//! - Unmatched funds are listed once and never weighted
//! - Aggregation is a pure function of its inputs

use approx::assert_relative_eq;
use fundscope_core::prelude::*;
use fundscope_core::parse_lenient;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Generates an amount as it would appear in an export, e.g. "1234.56".
fn arb_amount() -> impl Strategy<Value = String> {
    (0.0f64..1_000_000.0).prop_map(|v| format!("{v:.2}"))
}

/// Generates a record for one of a small set of funds, so duplicates occur.
fn arb_record() -> impl Strategy<Value = PortfolioRecord> {
    ("[A-E]", arb_amount()).prop_map(|(fund, amount)| PortfolioRecord::new(fund, amount))
}

fn arb_records(max_count: usize) -> impl Strategy<Value = Vec<PortfolioRecord>> {
    proptest::collection::vec(arb_record(), 0..=max_count)
}

/// Generates a configuration covering some of funds A-E.
fn arb_config() -> impl Strategy<Value = FundPropertyConfig> {
    proptest::collection::vec(
        ("[A-E]", "(Class|Region|Sector)", "[a-d]", 0.0f64..1.0),
        0..20,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .fold(FundPropertyConfig::new(), |config, (fund, ty, name, w)| {
                config.with_weight(fund, ty, name, w)
            })
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_repeated_fund_sums_amounts(amounts in proptest::collection::vec(arb_amount(), 1..20)) {
        let records: Vec<_> = amounts
            .iter()
            .map(|a| PortfolioRecord::new("FUND", a.as_str()))
            .collect();

        let expected = amounts
            .iter()
            .map(|a| parse_lenient(a))
            .reduce(|acc, v| acc + v)
            .unwrap();

        let summary = PortfolioSummary::from_records(&records);
        prop_assert_eq!(summary.len(), 1);
        prop_assert_eq!(summary.get("FUND"), Some(expected));
    }

    #[test]
    fn prop_total_equals_consolidated_sum(records in arb_records(40), config in arb_config()) {
        let portfolio = PortfolioSummary::from_records(&records);
        let summary = summarize(&records, &config);
        prop_assert_eq!(summary.total, portfolio.total());
    }

    #[test]
    fn prop_unmatched_listed_once_and_never_weighted(
        records in arb_records(40),
        config in arb_config(),
    ) {
        let portfolio = PortfolioSummary::from_records(&records);
        let summary = summarize(&records, &config);

        for (fund, _) in portfolio.iter() {
            let listed = summary.unmatched.iter().filter(|f| f.as_str() == fund).count();
            let expected = usize::from(!config.contains(fund));
            prop_assert_eq!(listed, expected);
        }

        let matched = PortfolioSummary::from_records(
            &records
                .iter()
                .filter(|r| r.fund().is_some_and(|f| config.contains(f)))
                .cloned()
                .collect::<Vec<_>>(),
        );
        prop_assert_eq!(summary.properties, summarize_portfolio(&matched, &config).properties);
    }

    #[test]
    fn prop_matched_weights_add_up(amount in 1.0f64..1_000_000.0, config in arb_config()) {
        let config = config.with_weight("A", "Class", "Cash", 0.1);
        let fund_config = config.get("A").unwrap();
        let declared: f64 = fund_config
            .values()
            .flat_map(|names| names.values())
            .map(PropertyWeight::value)
            .sum();

        let summary = summarize(&[PortfolioRecord::new("A", amount.to_string())], &config);
        let weighted: f64 = summary
            .properties
            .values()
            .flat_map(|names| names.values())
            .map(|v| v / amount)
            .sum();

        prop_assert!((weighted - declared).abs() <= 1e-9 * declared.max(1.0));
    }

    #[test]
    fn prop_summarize_is_deterministic(records in arb_records(40), config in arb_config()) {
        let first = summarize(&records, &config);
        let second = summarize(&records, &config);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Deterministic checks
// =============================================================================

#[test]
fn property_weights_summing_to_one_reproduce_total() {
    let config = FundPropertyConfig::new()
        .with_weight("A", "Class", "Equity", 0.7)
        .with_weight("A", "Class", "Bond", 0.3)
        .with_weight("B", "Class", "Equity", 0.2)
        .with_weight("B", "Class", "Bond", 0.8);

    for size in [1, 5, 25, 100] {
        let records: Vec<_> = (0..size)
            .map(|i| PortfolioRecord::new(if i % 2 == 0 { "A" } else { "B" }, format!("{}", 100 + i)))
            .collect();

        let summary = summarize(&records, &config);
        let class_total: f64 = summary.properties["Class"].values().sum();
        assert_relative_eq!(class_total, summary.total, max_relative = 1e-12);
    }
}

#[test]
fn property_weights_need_not_sum_to_one() {
    let config = FundPropertyConfig::new()
        .with_weight("A", "Class", "Equity", 0.9)
        .with_weight("A", "Class", "Bond", 0.4);

    let summary = summarize(&[PortfolioRecord::new("A", "1000")], &config);
    let class_total: f64 = summary.properties["Class"].values().sum();
    assert_relative_eq!(class_total, 1300.0, max_relative = 1e-12);
    assert_eq!(summary.total, 1000.0);
}
