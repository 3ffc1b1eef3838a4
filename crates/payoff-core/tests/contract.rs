// File: crates/payoff-core/tests/contract.rs
// Purpose: Contract validation at the parse boundary (strings, JSON) and labels.

use chrono::NaiveDate;
use payoff_core::{line_label, OptionContract, OptionType, PayoffError, Position, RawOptionContract};

fn raw(option_type: &str, long_short: &str) -> RawOptionContract {
    RawOptionContract {
        strike_price: 100.0,
        option_type: option_type.to_string(),
        bid: 1.0,
        ask: 2.0,
        long_short: long_short.to_string(),
        expiration_date: "2021-01-01".to_string(),
    }
}

#[test]
fn accepts_the_four_valid_combinations() {
    for (t, p) in [("Call", "long"), ("Call", "short"), ("Put", "long"), ("Put", "short")] {
        let c = OptionContract::try_from(raw(t, p)).expect("valid contract");
        assert_eq!(c.option_type().as_str(), t);
        assert_eq!(c.position().as_str(), p);
        assert_eq!(c.expiration_date(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    }
}

#[test]
fn rejects_unknown_type_or_position() {
    for (t, p) in [("Invalid", "Invalid"), ("Call", "Invalid"), ("Invalid", "long"), ("call", "long"), ("Put", "Long")] {
        let err = OptionContract::try_from(raw(t, p)).unwrap_err();
        assert!(matches!(err, PayoffError::InvalidContract(_)), "{t}/{p}: {err:?}");
        assert!(err.to_string().starts_with("Invalid option contract"));
    }
}

#[test]
fn rejects_bad_prices_and_dates() {
    let mut r = raw("Call", "long");
    r.strike_price = 0.0;
    assert!(matches!(OptionContract::try_from(r), Err(PayoffError::InvalidContract(_))));

    let mut r = raw("Call", "long");
    r.ask = -1.0;
    assert!(matches!(OptionContract::try_from(r), Err(PayoffError::InvalidContract(_))));

    let mut r = raw("Put", "short");
    r.bid = f64::NAN;
    assert!(matches!(OptionContract::try_from(r), Err(PayoffError::InvalidContract(_))));

    let mut r = raw("Put", "short");
    r.expiration_date = "01/01/2021".to_string();
    assert_eq!(
        OptionContract::try_from(r),
        Err(PayoffError::InvalidExpiration("01/01/2021".to_string()))
    );
}

#[test]
fn deserializes_from_json_records() {
    let json = r#"[
        {"type":"Call","long_short":"long","strike_price":100,"ask":2,"bid":1,"expiration_date":"2021-01-01"},
        {"type":"Put","long_short":"short","strike_price":100,"ask":2,"bid":1,"expiration_date":"2021-01-01"}
    ]"#;
    let contracts: Vec<OptionContract> = serde_json::from_str(json).expect("parse contracts");
    assert_eq!(contracts.len(), 2);
    assert_eq!(contracts[1].option_type(), OptionType::Put);
    assert_eq!(contracts[1].position(), Position::Short);

    let bad = r#"{"type":"Invalid","long_short":"long","strike_price":100,"ask":2,"bid":1,"expiration_date":"2021-01-01"}"#;
    let err = serde_json::from_str::<OptionContract>(bad).unwrap_err();
    assert!(err.to_string().contains("Invalid option contract"), "{err}");
}

#[test]
fn serializes_back_to_wire_strings() {
    let c = OptionContract::try_from(raw("Put", "long")).unwrap();
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["type"], "Put");
    assert_eq!(v["long_short"], "long");
    assert_eq!(v["expiration_date"], "2021-01-01");
}

#[test]
fn line_label_is_one_based_and_capitalized() {
    let c = OptionContract::try_from(raw("Call", "long")).unwrap();
    assert_eq!(line_label(&c, 0), "#1 (Call&Long)");
    let c = OptionContract::try_from(raw("Put", "short")).unwrap();
    assert_eq!(line_label(&c, 3), "#4 (Put&Short)");
}
