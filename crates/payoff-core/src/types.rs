// File: crates/payoff-core/src/types.rs
// Summary: Small value types shared with the chart layer.

use serde::{Deserialize, Serialize};

/// A hypothetical underlying price with a display label (e.g. "Break Even").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub value: f64,
    pub label: String,
}

impl PricePoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

/// One evaluated point of a payoff curve: underlying price `x`, profit/loss `y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartSeriesPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<ChartSeriesPoint> for [f64; 2] {
    fn from(p: ChartSeriesPoint) -> Self {
        [p.x, p.y]
    }
}
