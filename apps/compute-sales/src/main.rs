//! # compute-sales
//!
//! Prices a sales record against a catalogue and writes the report.
//!
//! ## Usage
//! ```bash
//! compute-sales prices.json sales.json
//!
//! # Write the report elsewhere, with debug logs on stderr
//! SALES_RESULTS_FILE=out/report.txt SALES_LOG=debug compute-sales prices.json sales.json
//! ```
//!
//! ## Exit Codes
//! - 0: Report written (even when some records were rejected)
//! - 1: Input document missing or malformed, results file unwritable,
//!   invalid configuration
//! - 2: Wrong number of arguments

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use compute_sales::cli::Args;
use compute_sales::config::{RunConfig, DEFAULT_LOG_FILTER};
use compute_sales::{run, RunError};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = RunConfig::load().context("Failed to load configuration")?;

    init_tracing(&config);

    match run(&args, &config) {
        Ok(report) => {
            print!("{}", report.render());
            Ok(ExitCode::SUCCESS)
        }
        Err(RunError::Inputs(errors)) => {
            for error in &errors {
                eprintln!("Error: {error}");
            }
            eprintln!("{}", RunError::Inputs(errors));
            Ok(ExitCode::FAILURE)
        }
        Err(err @ RunError::Report(_)) => Err(err.into()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Takes precedence over everything
/// - `SALES_LOG=info` - Used when `RUST_LOG` is unset
/// - Default: WARN level
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(config: &RunConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
