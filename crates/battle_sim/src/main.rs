use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_sim::{run_match, ticks_for, MatchReport};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Play headless monster battles and inspect the results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one autopiloted match and emit a JSON report.
    Simulate(SimulateArgs),
    /// Pretty-print an existing report.
    Report(ReportArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// RNG seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 180.0)]
    max_seconds: f64,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => handle_simulate(args),
        Commands::Report(args) => handle_report(args),
    }
}

fn handle_simulate(args: SimulateArgs) -> Result<()> {
    if !(args.max_seconds.is_finite() && args.max_seconds > 0.0) {
        anyhow::bail!("--max-seconds must be positive, got {}", args.max_seconds);
    }
    let seed = args
        .seed
        .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
    let report = run_match(seed, ticks_for(args.max_seconds));
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");

    if let Some(path) = args.out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: MatchReport = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse report {}", args.input.display()))?;
    println!("{}", report.summary_line());
    Ok(())
}
