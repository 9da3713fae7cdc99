//! Headless autopilot simulator for tuning analysis.
//!
//! Usage: cargo run --bin simulator -- [OPTIONS]
//!
//! Plays many seeded games with the autopilot and prints per-run results
//! plus a summary, so tuning changes can be compared without a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use flappy::simulator::{run_simulation, SimConfig};
use flappy::Tuning;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simulator", about = "Run the flappy autopilot headlessly.")]
struct Args {
    /// Number of runs.
    #[arg(short = 'n', long, default_value_t = 10)]
    runs: u32,

    /// Base seed; run i uses seed + i.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Stop a run after this many ticks.
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// TOML file overriding game tuning.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only print the summary.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let tuning = match &args.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_ticks_per_run: args.max_ticks,
        tuning,
    };

    println!("=== Flappy Simulator ===");
    println!(
        "Runs: {}, seed: {}, max ticks: {}",
        config.num_runs, config.seed, config.max_ticks_per_run
    );
    println!();

    let report = run_simulation(&config);
    if !args.quiet {
        for (run, stats) in report.runs.iter().enumerate() {
            let outcome = match stats.crash {
                Some(cause) => format!("{:?}", cause),
                None => "timed out".to_string(),
            };
            println!(
                "  Run {} (seed {}): score {}, {} ticks, {} flaps ({})",
                run + 1,
                stats.seed,
                stats.score,
                stats.ticks,
                stats.flaps,
                outcome
            );
        }
        println!();
    }

    println!("{}", report);
    Ok(())
}
