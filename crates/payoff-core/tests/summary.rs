// File: crates/payoff-core/tests/summary.rs
// Purpose: Contract and portfolio summaries as shown next to the chart.

use payoff_core::{ContractSummary, OptionContract, PortfolioSummary};

fn contracts() -> Vec<OptionContract> {
    serde_json::from_str(
        r#"[
        {"type":"Call","long_short":"long","strike_price":100,"ask":2,"bid":1,"expiration_date":"2021-01-01"},
        {"type":"Put","long_short":"short","strike_price":100,"ask":2,"bid":1,"expiration_date":"2021-01-01"}
    ]"#,
    )
    .unwrap()
}

#[test]
fn portfolio_bounds_and_break_evens() {
    let s = PortfolioSummary::of(&contracts());
    assert_eq!(s.max_profit, f64::INFINITY);
    assert_eq!(s.max_loss, f64::NEG_INFINITY);
    assert_eq!(s.break_evens, vec![102.0, 99.0]);
    assert_eq!(
        s.to_string(),
        "Max Profit Infinity\nMax Loss -Infinity\nAll break evens $102.00 $99.00"
    );
}

#[test]
fn contract_summary_lines() {
    let cs = contracts();
    let first = ContractSummary::of(&cs[0], 0);
    let text = first.to_string();
    assert!(text.starts_with("#1 (Call&Long)\n"));
    assert!(text.contains("Bid $1.00"));
    assert!(text.contains("Ask $2.00"));
    assert!(text.contains("Strike Price $100.00"));
    assert!(text.contains("Break Even $102.00"));
    assert!(text.contains("Max Profit Infinity"));
    assert!(text.contains("Max Loss -$2.00"));

    let second = ContractSummary::of(&cs[1], 1);
    assert_eq!(second.break_even, 99.0);
    assert_eq!(second.max_profit, 1.0);
    assert_eq!(second.max_loss, f64::NEG_INFINITY);
}

#[test]
fn empty_portfolio() {
    let s = PortfolioSummary::of(&[]);
    assert_eq!(s.max_profit, 0.0);
    assert!(s.break_evens.is_empty());
}
