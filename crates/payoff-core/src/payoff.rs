// File: crates/payoff-core/src/payoff.rs
// Summary: Payoff engine at expiration: break-even, reward at price, theoretical max/min reward.
// Notes:
// - Time value and fees are ignored.
// - Every function matches all four (type, position) pairs explicitly.

use crate::contract::{OptionContract, OptionType, Position};
use crate::types::PricePoint;

/// Underlying price at which the contract's profit/loss is exactly zero.
pub fn break_even(contract: &OptionContract) -> f64 {
    let strike = contract.strike_price();
    match (contract.option_type(), contract.position()) {
        (OptionType::Call, Position::Long) => strike + contract.ask(),
        (OptionType::Call, Position::Short) => strike + contract.bid(),
        (OptionType::Put, Position::Long) => strike - contract.ask(),
        (OptionType::Put, Position::Short) => strike - contract.bid(),
    }
}

/// Break-even as a labelled price point.
pub fn break_even_point(contract: &OptionContract) -> PricePoint {
    PricePoint::new(break_even(contract), "Break Even")
}

/// Net profit/loss at expiration if the underlying settles at `price`.
pub fn reward(price: f64, contract: &OptionContract) -> f64 {
    let strike = contract.strike_price();
    match (contract.option_type(), contract.position()) {
        (OptionType::Call, Position::Long) => (price - strike).max(0.0) - contract.ask(),
        (OptionType::Put, Position::Long) => (strike - price).max(0.0) - contract.ask(),
        (OptionType::Call, Position::Short) => contract.bid() - (price - strike).max(0.0),
        (OptionType::Put, Position::Short) => contract.bid() - (strike - price).max(0.0),
    }
}

/// Theoretical ceiling of `reward`.
///
/// Long positions report `+inf` for both calls and puts; a long put is not
/// capped at `strike - ask` here.
pub fn max_reward(contract: &OptionContract) -> f64 {
    match (contract.option_type(), contract.position()) {
        (OptionType::Call, Position::Long) => f64::INFINITY,
        (OptionType::Call, Position::Short) => contract.bid(),
        (OptionType::Put, Position::Long) => f64::INFINITY,
        (OptionType::Put, Position::Short) => contract.bid(),
    }
}

/// Theoretical floor of `reward`.
pub fn min_reward(contract: &OptionContract) -> f64 {
    match (contract.option_type(), contract.position()) {
        (OptionType::Call, Position::Long) => -contract.ask(),
        (OptionType::Call, Position::Short) => f64::NEG_INFINITY,
        (OptionType::Put, Position::Long) => -contract.ask(),
        (OptionType::Put, Position::Short) => f64::NEG_INFINITY,
    }
}

/// Aggregate profit/loss of several contracts held together.
pub fn portfolio_reward(price: f64, contracts: &[OptionContract]) -> f64 {
    contracts.iter().map(|c| reward(price, c)).sum()
}
