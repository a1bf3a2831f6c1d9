//! workout-report
//!
//! Leser treningspakker (JSON-fil eller innebygd eksempelsett) og skriver én
//! oppsummeringslinje per pakke til stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use workout_core::cli::{print_report, OutputFormat, ReportOptions};
use workout_core::metrics::Metrics;
use workout_core::packages::{load_packages, sample_packages};

#[derive(Debug, Parser)]
#[command(name = "workout-report", version, about = "Summarize running, walking and swimming workouts")]
struct Args {
    /// JSON-fil med pakker, f.eks. [["RUN", [15000, 1, 75]]]
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Avbryt på første ugyldige pakke
    #[arg(long)]
    strict: bool,

    /// Skriv Prometheus-tellere til stderr etter rapporten
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let packages = match &args.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("could not load packages from {}", path.display()))?,
        None => {
            info!("no --input given, using built-in sample packages");
            sample_packages()
        }
    };

    let metrics = Metrics::new().context("failed to set up metrics registry")?;
    let opts = ReportOptions { format: args.format, strict: args.strict };

    let outcome = print_report(&packages, &opts, &metrics)?;
    info!("report done: {} written, {} skipped", outcome.written, outcome.skipped);

    if args.metrics {
        eprint!("{}", metrics.encode_text()?);
    }
    Ok(())
}
