//! Quantity parsing and formatting.
//!
//! Splits free-text quantity strings (e.g., "1 1/2 cups", "500g") into a
//! numeric magnitude and a trailing unit, and turns scaled magnitudes back
//! into human-readable strings that prefer common culinary fractions.

use serde::{Deserialize, Serialize};

/// A quantity string split into its numeric magnitude and trailing unit.
///
/// If `magnitude` is `None` the input had no numeric prefix (or a malformed
/// one, like a zero denominator) and `unit` holds the entire normalized
/// input so it can pass through to display unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    pub magnitude: Option<f64>,
    pub unit: String,
}

/// Tolerance for snapping scaled magnitudes to culinary fractions.
/// Absorbs floating-point drift from repeated scale/unscale cycles.
const FRACTION_TOLERANCE: f64 = 0.01;

/// Parse a quantity string into a magnitude and unit.
///
/// The input is trimmed and lowercased before matching, so unit casing is
/// not preserved (parsed-and-scaled quantities display lowercase units).
/// Numeric prefixes are matched in priority order: mixed number ("1 1/2"),
/// decimal ("1.5"), simple fraction ("1/2"), plain integer ("500").
///
/// This never fails - unparseable input comes back with `magnitude: None`
/// and the full normalized text as the unit.
pub fn parse_quantity(raw: &str) -> ParsedQuantity {
    let normalized = raw.trim().to_lowercase();

    match split_numeric_prefix(&normalized) {
        Some((magnitude, consumed)) => ParsedQuantity {
            magnitude: Some(magnitude),
            unit: normalized[consumed..].trim().to_string(),
        },
        None => ParsedQuantity {
            magnitude: None,
            unit: normalized,
        },
    }
}

/// Format a magnitude back into a display string, reattaching the unit.
///
/// Fractional parts near 1/4, 1/2, or 3/4 render as those fractions; a
/// fractional part near zero renders just the whole number (including "0"
/// for quantities that scaled below one whole unit). Anything else falls
/// back to two decimal places. A `None` magnitude passes the unit through
/// unchanged.
pub fn format_quantity(magnitude: Option<f64>, unit: &str) -> String {
    let Some(value) = magnitude else {
        return unit.to_string();
    };

    let whole = value.floor() as i64;
    let fraction = value - value.floor();

    let number = if fraction < FRACTION_TOLERANCE {
        whole.to_string()
    } else if (fraction - 0.25).abs() < FRACTION_TOLERANCE {
        join_whole_and_fraction(whole, "1/4")
    } else if (fraction - 0.5).abs() < FRACTION_TOLERANCE {
        join_whole_and_fraction(whole, "1/2")
    } else if (fraction - 0.75).abs() < FRACTION_TOLERANCE {
        join_whole_and_fraction(whole, "3/4")
    } else {
        format!("{:.2}", value)
    };

    format!("{} {}", number, unit).trim().to_string()
}

/// Join a whole-number part with a fraction, omitting a zero whole part
/// ("1/2" rather than "0 1/2").
fn join_whole_and_fraction(whole: i64, fraction: &str) -> String {
    if whole > 0 {
        format!("{} {}", whole, fraction)
    } else {
        fraction.to_string()
    }
}

/// Match a numeric prefix at the start of a normalized quantity string.
///
/// Returns the evaluated magnitude and the byte length consumed, or None
/// if the string has no numeric prefix. A syntactically valid fraction
/// with a zero denominator is treated as no match at all, so "1/0 cups"
/// degrades to passthrough rather than matching the leading "1".
fn split_numeric_prefix(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let whole_len = digit_run(bytes, 0);

    // Mixed number: "<whole> <numerator>/<denominator>"
    if whole_len > 0 {
        let mut i = whole_len;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i > whole_len {
            let num_len = digit_run(bytes, i);
            if num_len > 0 && bytes.get(i + num_len) == Some(&b'/') {
                let den_start = i + num_len + 1;
                let den_len = digit_run(bytes, den_start);
                if den_len > 0 {
                    let end = den_start + den_len;
                    let whole: f64 = s[..whole_len].parse().ok()?;
                    let fraction = fraction_value(&s[i..end])?;
                    return Some((whole + fraction, end));
                }
            }
        }
    }

    // Decimal: "<digits>.<digits>" (a bare leading dot like ".5" also counts)
    if bytes.get(whole_len) == Some(&b'.') {
        let frac_len = digit_run(bytes, whole_len + 1);
        if frac_len > 0 {
            let end = whole_len + 1 + frac_len;
            let value: f64 = s[..end].parse().ok()?;
            return Some((value, end));
        }
    }

    // Simple fraction: "<numerator>/<denominator>"
    if whole_len > 0 && bytes.get(whole_len) == Some(&b'/') {
        let den_len = digit_run(bytes, whole_len + 1);
        if den_len > 0 {
            let end = whole_len + 1 + den_len;
            let value = fraction_value(&s[..end])?;
            return Some((value, end));
        }
    }

    // Plain integer: "<digits>"
    if whole_len > 0 {
        let value: f64 = s[..whole_len].parse().ok()?;
        return Some((value, whole_len));
    }

    None
}

/// Count the run of ASCII digits starting at `start`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i - start
}

/// Evaluate a fraction string like "1/2". Zero denominators are malformed
/// input, not a division fault.
fn fraction_value(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}
