// File: crates/chart-core/src/error.rs
// Summary: Chart adapter and canvas errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid sampling range [{min}, {max}) step {step}: {reason}")]
    InvalidRange { min: f64, max: f64, step: f64, reason: &'static str },
    /// The canvas handle was released; the adapter or canvas must not be used any more.
    #[error("chart canvas already disposed")]
    Disposed,
    #[error("chart canvas backend error: {0}")]
    Backend(String),
}
