use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

mod config;
mod console;
mod plotting;
mod workflow;

/// Operator console for a simulated waste-to-energy pyrolysis plant.
#[derive(Debug, Parser)]
#[command(name = "pyrowatch", version, about)]
struct Cli {
    /// Scenario YAML file describing the session; the built-in demo
    /// session runs when omitted.
    #[arg(long)]
    scenario: Option<String>,

    /// Number of ticks to run, overriding the scenario.
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed, overriding the scenario.
    #[arg(long)]
    seed: Option<u64>,

    /// Base directory for session output (log and charts).
    #[arg(long, default_value = "./data/runs")]
    out: String,

    /// Print the full dashboard after every tick instead of once at the end.
    #[arg(long)]
    watch: bool,

    /// Sleep the real sampling interval between ticks.
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("--- Pyrowatch Operator Console ---");

    let scenario = match &cli.scenario {
        Some(path) => config::load_scenario(path)?,
        None => config::demo_scenario(),
    };

    let output_dir = format!(
        "{}/{}_{}",
        cli.out,
        scenario.scenario_id,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    let options = workflow::SessionOptions {
        ticks: cli.ticks,
        seed: cli.seed,
        watch: cli.watch,
        realtime: cli.realtime,
    };
    workflow::run_session(&scenario, &options, &output_dir)?;

    println!("\nSession complete. Results are in '{}'", output_dir);

    Ok(())
}
