mod ci;
mod input;
mod report;
mod stats;
mod tdist;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportMode {
    /// Bare percentage on stdout.
    Value,
    /// JSON summary with the intermediate quantities.
    Summary,
}

#[derive(Debug, Parser)]
#[command(
    name = "bench-ci",
    version,
    about = "Student's t relative confidence interval over a file of score runs"
)]
struct Cli {
    /// Score file, one value per line; a line that does not parse to a
    /// finite number counts as a missing entry. A .gz file is decompressed
    /// transparently.
    data_file: PathBuf,

    /// Output shape.
    #[arg(long, value_enum, default_value_t = ReportMode::Value)]
    mode: ReportMode,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] input::InputError),
    #[error("cannot encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Diagnostics stay on stderr; stdout carries only the result.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), RunError> {
    let scores = input::read_scores(&cli.data_file)?;
    let analysis = ci::analyze(&scores);
    info!(
        samples = analysis.samples,
        valid = analysis.valid,
        "loaded {}",
        cli.data_file.display()
    );
    if analysis.interval.is_none() {
        warn!("confidence interval undefined: no usable spread in the sample");
    }

    match cli.mode {
        ReportMode::Value => println!("{}", report::render_value(analysis.interval)),
        ReportMode::Summary => {
            let summary = report::Summary::from_analysis(&analysis);
            println!("{}", report::render_summary_json(&summary)?);
        }
    }
    Ok(())
}
