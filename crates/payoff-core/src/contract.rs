// File: crates/payoff-core/src/contract.rs
// Summary: Option contract value object; raw wire records are validated into typed contracts.
// Notes:
// - Wire strings are exactly "Call"/"Put" and "long"/"short". Anything else is
//   rejected with `PayoffError::InvalidContract`; there is no default branch.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayoffError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Call" => Ok(OptionType::Call),
            "Put" => Ok(OptionType::Put),
            other => Err(PayoffError::InvalidContract(format!("unknown option type '{other}'"))),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position direction: long pays the ask to open, short receives the bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Long,
    Short,
}

impl Position {
    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Long => "long",
            Position::Short => "short",
        }
    }
}

impl FromStr for Position {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "long" => Ok(Position::Long),
            "short" => Ok(Position::Short),
            other => Err(PayoffError::InvalidContract(format!("unknown position '{other}'"))),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract record as it arrives from JSON/CSV, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawOptionContract {
    pub strike_price: f64,
    #[serde(rename = "type")]
    pub option_type: String,
    pub bid: f64,
    pub ask: f64,
    pub long_short: String,
    /// ISO format (YYYY-MM-DD)
    pub expiration_date: String,
}

/// Immutable description of one option contract.
/// Contract: strike is finite and positive, bid/ask are finite and non-negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOptionContract", into = "RawOptionContract")]
pub struct OptionContract {
    strike_price: f64,
    option_type: OptionType,
    bid: f64,
    ask: f64,
    position: Position,
    expiration_date: NaiveDate,
}

impl OptionContract {
    pub fn new(
        option_type: OptionType,
        position: Position,
        strike_price: f64,
        bid: f64,
        ask: f64,
        expiration_date: NaiveDate,
    ) -> Result<Self> {
        if !strike_price.is_finite() || strike_price <= 0.0 {
            return Err(PayoffError::InvalidContract(format!("strike price must be positive (got {strike_price})")));
        }
        if !bid.is_finite() || bid < 0.0 {
            return Err(PayoffError::InvalidContract(format!("bid must be non-negative (got {bid})")));
        }
        if !ask.is_finite() || ask < 0.0 {
            return Err(PayoffError::InvalidContract(format!("ask must be non-negative (got {ask})")));
        }
        Ok(Self { strike_price, option_type, bid, ask, position, expiration_date })
    }

    pub fn strike_price(&self) -> f64 { self.strike_price }
    pub fn option_type(&self) -> OptionType { self.option_type }
    pub fn bid(&self) -> f64 { self.bid }
    pub fn ask(&self) -> f64 { self.ask }
    pub fn position(&self) -> Position { self.position }
    pub fn expiration_date(&self) -> NaiveDate { self.expiration_date }
}

impl TryFrom<RawOptionContract> for OptionContract {
    type Error = PayoffError;

    fn try_from(raw: RawOptionContract) -> Result<Self> {
        let option_type = raw.option_type.parse::<OptionType>()?;
        let position = raw.long_short.parse::<Position>()?;
        let expiration_date = NaiveDate::parse_from_str(raw.expiration_date.trim(), "%Y-%m-%d")
            .map_err(|_| PayoffError::InvalidExpiration(raw.expiration_date.clone()))?;
        Self::new(option_type, position, raw.strike_price, raw.bid, raw.ask, expiration_date)
    }
}

impl From<OptionContract> for RawOptionContract {
    fn from(c: OptionContract) -> Self {
        Self {
            strike_price: c.strike_price,
            option_type: c.option_type.as_str().to_string(),
            bid: c.bid,
            ask: c.ask,
            long_short: c.position.as_str().to_string(),
            expiration_date: c.expiration_date.format("%Y-%m-%d").to_string(),
        }
    }
}
