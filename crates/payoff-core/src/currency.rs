// File: crates/payoff-core/src/currency.rs
// Summary: US-dollar formatting for prices and rewards ("$1,234.00", "-$2.00", "Infinity").

use crate::error::{PayoffError, Result};

/// Format a value as US dollars with thousands separators and two decimals.
/// Infinite values print as "Infinity"/"-Infinity"; NaN prints as "NaN".
/// Negative zero keeps its sign ("-$0.00").
pub fn to_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Parse a numeric string (or an infinity sentinel) and format it as currency.
/// Blank input counts as zero.
pub fn to_currency_str(input: &str) -> Result<String> {
    let s = input.trim();
    let value = match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => match s.parse::<f64>() {
            // `str::parse` also accepts "inf"/"nan"; only plain numbers pass here.
            Ok(v) if v.is_finite() => v,
            _ => return Err(PayoffError::InvalidNumericInput(input.to_string())),
        },
    };
    Ok(to_currency(value))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
