// File: crates/payoff-core/src/summary.rs
// Summary: Per-contract and portfolio summaries (break-evens, profit/loss bounds).

use std::fmt;

use serde::Serialize;

use crate::contract::OptionContract;
use crate::currency::to_currency;
use crate::label::line_label;
use crate::payoff::{break_even, max_reward, min_reward};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContractSummary {
    pub label: String,
    pub bid: f64,
    pub ask: f64,
    pub strike_price: f64,
    pub break_even: f64,
    pub max_profit: f64,
    pub max_loss: f64,
}

impl ContractSummary {
    pub fn of(contract: &OptionContract, index: usize) -> Self {
        Self {
            label: line_label(contract, index),
            bid: contract.bid(),
            ask: contract.ask(),
            strike_price: contract.strike_price(),
            break_even: break_even(contract),
            max_profit: max_reward(contract),
            max_loss: min_reward(contract),
        }
    }
}

impl fmt::Display for ContractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "  Bid {}", to_currency(self.bid))?;
        writeln!(f, "  Ask {}", to_currency(self.ask))?;
        writeln!(f, "  Strike Price {}", to_currency(self.strike_price))?;
        writeln!(f, "  Break Even {}", to_currency(self.break_even))?;
        writeln!(f, "  Max Profit {}", to_currency(self.max_profit))?;
        write!(f, "  Max Loss {}", to_currency(self.max_loss))
    }
}

/// Bounds of several contracts held together.
/// `max_profit`/`max_loss` add the per-contract theoretical bounds, so any
/// unbounded leg makes the total unbounded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub max_profit: f64,
    pub max_loss: f64,
    /// Per-contract break-evens, in input order.
    pub break_evens: Vec<f64>,
}

impl PortfolioSummary {
    pub fn of(contracts: &[OptionContract]) -> Self {
        Self {
            max_profit: contracts.iter().map(max_reward).sum(),
            max_loss: contracts.iter().map(min_reward).sum(),
            break_evens: contracts.iter().map(break_even).collect(),
        }
    }
}

impl fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Profit {}", to_currency(self.max_profit))?;
        writeln!(f, "Max Loss {}", to_currency(self.max_loss))?;
        let evens = self.break_evens.iter().map(|v| to_currency(*v)).collect::<Vec<_>>();
        write!(f, "All break evens {}", evens.join(" "))
    }
}
