//! Stream-Census collector
//!
//! Runs one census and appends the result to the file given on the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use census_telemetry::{init_logging, TelemetryConfig};
use stream_census::{run_census, CensusConfig};

/// Stream-Census: viewer inequality for one live category
#[derive(Parser, Debug)]
#[command(name = "stream-census", version)]
#[command(about = "Append one viewer-inequality sample for a live category to a CSV file")]
struct Args {
    /// File the census line is appended to (created if missing)
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let telemetry = TelemetryConfig::from_env().with_service_name(env!("CARGO_PKG_NAME"));
    if let Err(e) = init_logging(&telemetry) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            if !tracing::enabled!(tracing::Level::ERROR) {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = CensusConfig::from_env().context("Failed to load configuration")?;

    run_census(&config, &args.output).await.context("Census failed")?;

    Ok(())
}
