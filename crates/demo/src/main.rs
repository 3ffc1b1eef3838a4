// File: crates/demo/src/main.rs
// Summary: Demo loads option contracts (JSON/CSV), prints payoff summaries and renders the profit/loss chart to PNG.

mod scenario;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chart_core::{break_even_mark, ChartOptions, ProfitLossChart};
use chart_render_skia::{theme, SkiaCanvas, SurfaceSpec};
use clap::Parser;
use payoff_core::{portfolio_reward, to_currency, ContractSummary, PortfolioSummary};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Debug, Parser)]
#[command(name = "payoff-demo", about = "Render an option payoff chart")]
struct Cli {
    /// Scenario file (.json or .csv). Uses the built-in sample when omitted.
    input: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "target/out/payoff.png")]
    out: PathBuf,

    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,

    #[arg(long)]
    x_max: Option<f64>,

    #[arg(long)]
    x_step: Option<f64>,

    /// Show the break-even mark-line of contract `n` (0-based).
    #[arg(long, value_name = "INDEX")]
    mark: Option<usize>,

    /// Also write the merged chart option as JSON.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, default_value_t = chart_render_skia::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = chart_render_skia::types::HEIGHT)]
    height: i32,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let scenario = match &cli.input {
        Some(path) => Scenario::load(path).with_context(|| format!("failed to load scenario '{}'", path.display()))?,
        None => Scenario::sample()?,
    }
    .with_overrides(cli.x_min, cli.x_max, cli.x_step);

    if scenario.contracts.is_empty() {
        bail!("no contracts loaded; check the input file");
    }
    info!(contracts = scenario.contracts.len(), "scenario loaded");

    for (i, contract) in scenario.contracts.iter().enumerate() {
        println!("{}", ContractSummary::of(contract, i));
    }
    println!("{}", PortfolioSummary::of(&scenario.contracts));

    let (x_min, x_max, x_step) = scenario.range();
    print_reward_table(&scenario, x_min, x_max);

    let palette = scenario.palette();
    let spec = SurfaceSpec { width: cli.width, height: cli.height, theme: theme::find(&cli.theme), ..SurfaceSpec::default() };
    let options = ChartOptions::payoff(x_min, x_max, x_step, palette.clone());
    let mut chart = ProfitLossChart::<SkiaCanvas>::new(spec, &scenario.contracts, &options)
        .context("failed to build the payoff chart")?;

    if let Some(index) = cli.mark {
        let Some(contract) = scenario.contracts.get(index) else {
            bail!("--mark {index} is out of range (have {} contracts)", scenario.contracts.len());
        };
        let mark = break_even_mark(contract, palette.color(index));
        info!(label = %mark.label, "marking break-even");
        chart.set_mark_line(&mark)?;
    }

    let canvas = chart.canvas().context("chart canvas already released")?;
    canvas.render_to_png(&cli.out)?;
    println!("Wrote {}", cli.out.display());

    if let Some(path) = &cli.json {
        let text = serde_json::to_string_pretty(canvas.option()).context("serializing chart option")?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    chart.dispose();
    debug!("done");
    Ok(())
}

/// Combined profit/loss at a handful of prices across the range.
fn print_reward_table(scenario: &Scenario, x_min: f64, x_max: f64) {
    const ROWS: usize = 5;
    println!("Price          Portfolio P/L");
    for i in 0..ROWS {
        let price = x_min + (x_max - x_min) * i as f64 / (ROWS - 1) as f64;
        let total = portfolio_reward(price, &scenario.contracts);
        println!("{:<14} {}", to_currency(price), to_currency(total));
    }
}
