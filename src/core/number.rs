//! Conversions between display text and f64 operands.
//!
//! The display only ever holds text written by the engine, but that text
//! includes special values (`Infinity`, `NaN`) and exponent literals, and
//! digits may be appended after them. Parsing therefore reads the longest
//! numeric prefix instead of rejecting the whole string.

/// Magnitude at or above which numbers are written in exponent form.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero numbers are written in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Read the numeric value at the start of `text`.
///
/// Accepts an optional sign followed by `Infinity`, or by digits with an
/// optional fraction and optional exponent. Trailing characters are ignored.
/// Text without a numeric prefix yields NaN.
///
/// ```rust
/// use keycalc::core::parse_display;
///
/// assert_eq!(parse_display("12.5"), 12.5);
/// assert_eq!(parse_display("0."), 0.0);
/// assert_eq!(parse_display("Infinity5"), f64::INFINITY);
/// assert!(parse_display("NaN").is_nan());
/// ```
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Write `value` the way the display shows numbers.
///
/// Integral values carry no fractional part, other values use the shortest
/// digits that round-trip. Magnitudes of at least 1e21 or below 1e-6 use
/// exponent notation with an explicit exponent sign. Negative zero is
/// written as `0`.
///
/// ```rust
/// use keycalc::core::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Check whether `text` is a plain decimal literal: optional leading minus,
/// at least one digit, at most one decimal point.
pub fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0;
    let mut points = 0;
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
