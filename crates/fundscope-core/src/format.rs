//! Fixed-point formatting of amounts and shares.
//!
//! Values are rendered from their exact binary value with midpoints rounded
//! away from zero, so `0.25` becomes `"0.3"` at one decimal while `1.005`
//! (stored as 1.00499…) becomes `"1.00"` at two. Non-finite values print as
//! `NaN`, `Infinity` and `-Infinity`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with exactly `digits` decimals.
///
/// Negative values keep their sign even when they round to zero
/// (`-0.01` → `"-0.0"`); negative zero prints as `"0.0"`.
#[must_use]
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let precision = digits as usize;
    let body = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Beyond Decimal's range; plain float formatting is close enough.
        None => format!("{magnitude:.precision$}"),
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Formats `amount / total` as a percentage with one decimal.
///
/// There is no zero guard: a zero total gives `"NaN%"`, `"Infinity%"` or
/// `"-Infinity%"`.
///
/// # Example
///
/// ```rust
/// use fundscope_core::format_percentage;
///
/// assert_eq!(format_percentage(33.333, 100.0), "33.3%");
/// assert_eq!(format_percentage(1.0, 0.0), "Infinity%");
/// ```
#[must_use]
pub fn format_percentage(amount: f64, total: f64) -> String {
    let share = amount / total;
    format!("{}%", to_fixed(share * 100.0, 1))
}

/// Formats a currency amount with two decimals.
#[must_use]
pub fn format_amount(value: f64) -> String {
    to_fixed(value, 2)
}
