// File: crates/payoff-core/tests/payoff.rs
// Purpose: Break-even, reward and reward bounds for all four contract kinds.

use chrono::NaiveDate;
use payoff_core::{
    break_even, break_even_point, max_reward, min_reward, portfolio_reward, reward, OptionContract, OptionType,
    Position,
};

fn contract(option_type: OptionType, position: Position) -> OptionContract {
    let expiry = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    OptionContract::new(option_type, position, 100.0, 1.0, 2.0, expiry).unwrap()
}

fn all_kinds() -> Vec<OptionContract> {
    vec![
        contract(OptionType::Call, Position::Long),
        contract(OptionType::Call, Position::Short),
        contract(OptionType::Put, Position::Long),
        contract(OptionType::Put, Position::Short),
    ]
}

#[test]
fn long_call_scenario() {
    let c = contract(OptionType::Call, Position::Long);
    assert_eq!(break_even(&c), 102.0);
    assert_eq!(reward(110.0, &c), 8.0);
    assert_eq!(reward(90.0, &c), -2.0);
    assert_eq!(max_reward(&c), f64::INFINITY);
    assert_eq!(min_reward(&c), -2.0);
}

#[test]
fn short_call_scenario() {
    let c = contract(OptionType::Call, Position::Short);
    assert_eq!(break_even(&c), 101.0);
    assert_eq!(reward(110.0, &c), -9.0);
    assert_eq!(reward(90.0, &c), 1.0);
    assert_eq!(max_reward(&c), 1.0);
    assert_eq!(min_reward(&c), f64::NEG_INFINITY);
}

#[test]
fn long_put_scenario() {
    let c = contract(OptionType::Put, Position::Long);
    assert_eq!(break_even(&c), 98.0);
    assert_eq!(reward(90.0, &c), 8.0);
    assert_eq!(reward(110.0, &c), -2.0);
    assert_eq!(max_reward(&c), f64::INFINITY);
    assert_eq!(min_reward(&c), -2.0);
}

#[test]
fn short_put_scenario() {
    let c = contract(OptionType::Put, Position::Short);
    assert_eq!(break_even(&c), 99.0);
    assert_eq!(reward(90.0, &c), -9.0);
    assert_eq!(reward(110.0, &c), 1.0);
    assert_eq!(max_reward(&c), 1.0);
    assert_eq!(min_reward(&c), f64::NEG_INFINITY);
}

#[test]
fn reward_is_zero_at_break_even() {
    for c in all_kinds() {
        let be = break_even(&c);
        assert_eq!(reward(be, &c), 0.0, "{:?}/{:?}", c.option_type(), c.position());
    }
}

#[test]
fn reward_stays_within_bounds() {
    for c in all_kinds() {
        for i in 0..=40 {
            let price = i as f64 * 5.0;
            let r = reward(price, &c);
            assert!(r <= max_reward(&c), "price {price}: {r} above max");
            assert!(r >= min_reward(&c), "price {price}: {r} below min");
        }
    }
}

#[test]
fn break_even_point_is_labelled() {
    let p = break_even_point(&contract(OptionType::Call, Position::Long));
    assert_eq!(p.value, 102.0);
    assert_eq!(p.label, "Break Even");
}

#[test]
fn portfolio_reward_sums_legs() {
    let legs = vec![contract(OptionType::Call, Position::Long), contract(OptionType::Put, Position::Short)];
    // 8 + 1 at 110, -2 + -9 at 90
    assert_eq!(portfolio_reward(110.0, &legs), 9.0);
    assert_eq!(portfolio_reward(90.0, &legs), -11.0);
    assert_eq!(portfolio_reward(90.0, &[]), 0.0);
}
