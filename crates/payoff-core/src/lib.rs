// File: crates/payoff-core/src/lib.rs
// Summary: Payoff library entry point; exports the contract model, payoff math and formatting helpers.

pub mod contract;
pub mod currency;
pub mod error;
pub mod label;
pub mod payoff;
pub mod summary;
pub mod types;

pub use contract::{OptionContract, OptionType, Position, RawOptionContract};
pub use currency::{to_currency, to_currency_str};
pub use error::PayoffError;
pub use label::line_label;
pub use payoff::{break_even, break_even_point, max_reward, min_reward, portfolio_reward, reward};
pub use summary::{ContractSummary, PortfolioSummary};
pub use types::{ChartSeriesPoint, PricePoint};
