// File: crates/payoff-core/tests/currency.rs
// Purpose: USD formatting of numbers, numeric strings and infinity sentinels.

use payoff_core::{to_currency, to_currency_str, PayoffError};

#[test]
fn formats_numbers() {
    assert_eq!(to_currency(1234.0), "$1,234.00");
    assert_eq!(to_currency(1234.56), "$1,234.56");
    assert_eq!(to_currency(100.0), "$100.00");
    assert_eq!(to_currency(0.0), "$0.00");
    assert_eq!(to_currency(-2.0), "-$2.00");
    assert_eq!(to_currency(-0.0), "-$0.00");
    assert_eq!(to_currency(-0.001), "-$0.00");
    assert_eq!(to_currency(1_234_567.891), "$1,234,567.89");
}

#[test]
fn formats_infinities_literally() {
    assert_eq!(to_currency(f64::INFINITY), "Infinity");
    assert_eq!(to_currency(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn formats_numeric_strings() {
    assert_eq!(to_currency_str("1234").unwrap(), "$1,234.00");
    assert_eq!(to_currency_str("1234.56").unwrap(), "$1,234.56");
    assert_eq!(to_currency_str(" -3.5 ").unwrap(), "-$3.50");
    assert_eq!(to_currency_str("Infinity").unwrap(), "Infinity");
    assert_eq!(to_currency_str("-Infinity").unwrap(), "-Infinity");
}

#[test]
fn blank_strings_format_as_zero() {
    assert_eq!(to_currency_str("").unwrap(), "$0.00");
    assert_eq!(to_currency_str("   ").unwrap(), "$0.00");
}

#[test]
fn rejects_non_numeric_strings() {
    for input in ["abc", "inf", "NaN", "12abc"] {
        let err = to_currency_str(input).unwrap_err();
        assert_eq!(err, PayoffError::InvalidNumericInput(input.to_string()));
        assert!(err.to_string().starts_with("Invalid input"));
    }
}
