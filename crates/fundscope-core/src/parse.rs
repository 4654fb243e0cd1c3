//! Lenient numeric parsing.
//!
//! Portfolio exports and hand-edited configurations routinely carry values
//! such as `" 1200.50"`, `"50%"` or `"12 USD"`. Rather than rejecting them,
//! the longest numeric prefix is used; text without a numeric prefix yields
//! `NaN`.

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and an optional sign is accepted, followed
/// by either `Infinity` or `digits [. digits] [e|E [sign] digits]`. At least
/// one mantissa digit is required. Anything after the prefix is ignored.
///
/// # Example
///
/// ```rust
/// use fundscope_core::parse_lenient;
///
/// assert_eq!(parse_lenient("  42.5"), 42.5);
/// assert_eq!(parse_lenient("60%"), 60.0);
/// assert!(parse_lenient("n/a").is_nan());
/// ```
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
