//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads the band table
//! - runs the fetch/select/classify pipeline
//! - prints the report and writes the optional export

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{BandTable, RunConfig, stations};
use crate::error::{AppError, PipelineError};

pub mod pipeline;

/// Entry point for the `ionoband` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = run_config_from_args(&cli);
    if !stations::is_known(&config.station) {
        tracing::warn!(station = %config.station, "station code is not in the known list; querying anyway");
    }

    let bands = match &config.bands_path {
        Some(path) => BandTable::from_json_file(path)?,
        None => BandTable::iaru_region1(),
    };
    tracing::debug!(bands = bands.len(), "band table loaded");

    let run = pipeline::run(&config, &bands).map_err(|err| {
        if matches!(err, PipelineError::NoStationData { .. } | PipelineError::NoValidData { .. }) {
            tracing::info!(station = %config.station, lookback = %config.lookback, "no usable observation");
        }
        AppError::from(err)
    })?;

    println!("{}", crate::report::format_report(&run, config.color));

    if let Some(path) = &config.export_path {
        crate::io::export::write_report_json(path, &run)?;
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        station: cli.station.trim().to_ascii_uppercase(),
        lookback: cli.lookback.as_delta(),
        reference_time: cli.at,
        limit: cli.limit,
        bands_path: cli.bands.clone(),
        export_path: cli.export.clone(),
        color: !cli.no_color,
    }
}

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .try_init();
}
