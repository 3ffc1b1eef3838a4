// File: crates/demo/src/scenario.rs
// Summary: Scenario loading (contracts + chart range + palette) from JSON or CSV files.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::Palette;
use payoff_core::{OptionContract, RawOptionContract};
use serde::Deserialize;

const SAMPLE: &str = include_str!("../data/contracts.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    pub contracts: Vec<OptionContract>,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub x_step: Option<f64>,
    #[serde(default)]
    pub palette: Vec<String>,
}

impl Scenario {
    /// Built-in sample shipped with the demo.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE).context("parsing built-in sample scenario")
    }

    /// Load by extension: `.csv` as contract rows, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let is_csv = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Self::from_csv(file)
        } else {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Self::from_json(&text)
        }
    }

    /// Either the full scenario object or a bare contract list.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text).context("invalid scenario JSON")?;
        if value.is_array() {
            let contracts = serde_json::from_value(value).context("invalid contract list")?;
            Ok(Self { contracts, ..Self::default() })
        } else {
            serde_json::from_value(value).context("invalid scenario")
        }
    }

    /// CSV with headers `type,long_short,strike_price,bid,ask,expiration_date` (any order).
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut contracts = Vec::new();
        for (i, rec) in rdr.deserialize::<RawOptionContract>().enumerate() {
            // +2: header row and 1-based numbering
            let row = i + 2;
            let raw = rec.with_context(|| format!("malformed CSV row {row}"))?;
            let contract = OptionContract::try_from(raw).with_context(|| format!("CSV row {row}"))?;
            contracts.push(contract);
        }
        Ok(Self { contracts, ..Self::default() })
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, x_min: Option<f64>, x_max: Option<f64>, x_step: Option<f64>) -> Self {
        self.x_min = x_min.or(self.x_min);
        self.x_max = x_max.or(self.x_max);
        self.x_step = x_step.or(self.x_step);
        self
    }

    /// Sampling range `(min, max, step)`; defaults to `[0, 2 x highest strike)` in steps of 1.
    pub fn range(&self) -> (f64, f64, f64) {
        let top_strike = self.contracts.iter().map(|c| c.strike_price()).fold(0.0, f64::max);
        let default_max = if top_strike > 0.0 { top_strike * 2.0 } else { 100.0 };
        (self.x_min.unwrap_or(0.0), self.x_max.unwrap_or(default_max), self.x_step.unwrap_or(1.0))
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().cloned())
    }
}
