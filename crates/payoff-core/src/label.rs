// File: crates/payoff-core/src/label.rs
// Summary: Legend/series labels for contracts.

use crate::contract::OptionContract;

/// Series label such as `#1 (Call&Long)`; `index` is zero-based.
pub fn line_label(contract: &OptionContract, index: usize) -> String {
    format!(
        "#{} ({}&{})",
        index + 1,
        capitalize(contract.option_type().as_str()),
        capitalize(contract.position().as_str()),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
