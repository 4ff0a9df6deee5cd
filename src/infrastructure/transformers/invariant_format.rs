//! Culture-invariant canonical decimal rendering of `f64` values.
//!
//! Produces the shortest digit string that round-trips, with '.' as the
//! decimal separator. Decimal exponents in `[-4, 15)` render in fixed
//! notation (`0.0001`, `4294967295`); everything else in scientific notation
//! with an uppercase `E`, an explicit exponent sign and at least two exponent
//! digits (`1E-10`, `1.5E+20`). Non-finite values render as `NaN`,
//! `Infinity` and `-Infinity`.

const MIN_FIXED_EXPONENT: i32 = -4;
const MAX_FIXED_EXPONENT: i32 = 15;

pub fn format_invariant(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0", sign);
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let body = if (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        fixed_notation(&digits, exponent)
    } else {
        scientific_notation(&digits, exponent)
    };

    format!("{}{}", sign, body)
}

/// Significant digits (no leading/trailing zeros) and the decimal exponent of
/// the first digit, for a finite positive value
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip representation, e.g. "1.21e0"
    let rendered = format!("{:e}", value);
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');

    if digits.is_empty() {
        ("0".to_string(), exponent)
    } else {
        (digits.to_string(), exponent)
    }
}

fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", leading_zeros, digits);
    }

    let integer_len = exponent as usize + 1;
    if digits.len() <= integer_len {
        format!("{}{}", digits, "0".repeat(integer_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..integer_len], &digits[integer_len..])
    }
}

fn scientific_notation(digits: &str, exponent: i32) -> String {
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{}E{}{:02}", first, exponent_sign, exponent.abs())
    } else {
        format!("{}.{}E{}{:02}", first, rest, exponent_sign, exponent.abs())
    }
}
