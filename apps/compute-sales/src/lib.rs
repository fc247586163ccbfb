//! # compute-sales
//!
//! Orchestration for the `compute-sales` binary: load both documents,
//! time a single totalizer pass, persist the report.
//!
//! Kept as a library so the whole run can be driven from tests without
//! spawning a process.

pub mod cli;
pub mod config;

use std::time::Instant;

use tally_core::compute_total_sales;
use tally_io::{load_inputs, LoadError, ReportError, SalesReport};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::Args;
use crate::config::RunConfig;

/// Fatal run failures. Per-record problems never end up here.
#[derive(Debug, Error)]
pub enum RunError {
    /// One or both input documents failed to load; nothing was computed.
    #[error("No se puede continuar debido a errores en los archivos JSON.")]
    Inputs(Vec<LoadError>),

    /// The report was computed but could not be persisted.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Runs one complete computation.
///
/// ## Returns
/// * `Ok(SalesReport)` - Report already written to `config.results_path`
/// * `Err(RunError::Inputs)` - Load failure; results file untouched
/// * `Err(RunError::Report)` - Results file could not be written
pub fn run(args: &Args, config: &RunConfig) -> Result<SalesReport, RunError> {
    let inputs =
        load_inputs(&args.price_catalogue, &args.sales_record).map_err(RunError::Inputs)?;

    let started = Instant::now();
    let result = compute_total_sales(&inputs.catalogue, &inputs.records);
    let elapsed = started.elapsed();

    info!(
        total = result.total,
        priced = result.priced_records,
        rejected = result.errors.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "Sales computed"
    );
    for error in &result.errors {
        debug!(%error, "Record rejected");
    }

    let report = SalesReport::new(&result, elapsed);
    report.write_to(&config.results_path)?;
    Ok(report)
}
