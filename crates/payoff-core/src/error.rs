// File: crates/payoff-core/src/error.rs
// Summary: Error taxonomy for contract parsing and currency formatting.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayoffError {
    /// The `(type, long_short)` pair, or one of the prices, does not describe a valid contract.
    #[error("Invalid option contract: {0}")]
    InvalidContract(String),
    #[error("Invalid option contract: expiration date '{0}' is not an ISO date")]
    InvalidExpiration(String),
    /// Raised by currency formatting for strings that are neither numbers nor infinity sentinels.
    #[error("Invalid input: '{0}'")]
    InvalidNumericInput(String),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
