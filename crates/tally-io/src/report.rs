//! # Result Sink
//!
//! Renders a computation as the plain-text sales report and writes it to
//! the results file.
//!
//! ## Report Layout
//! ```text
//! Total de ventas: $3.00
//! Tiempo de ejecución: 0.0001 segundos
//!
//! Errores encontrados:
//! Producto 'milk' no encontrado en el catálogo.
//! Error: '-1' para el producto 'bread'.
//! ```
//! The blank line and the error section only appear when at least one
//! record was rejected.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tally_core::ComputationResult;
use tracing::info;

use crate::error::{ReportError, ReportResult};

/// Results file written in the working directory when nothing else is configured.
pub const RESULTS_FILE_NAME: &str = "SalesResults.txt";

/// Everything that goes into the results file.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    /// Total over every valid record.
    pub total: f64,

    /// Wall time spent in the totalizer.
    pub elapsed: Duration,

    /// Rendered per-record errors, in input order.
    pub errors: Vec<String>,
}

impl SalesReport {
    /// Builds a report from a finished computation.
    pub fn new(result: &ComputationResult, elapsed: Duration) -> Self {
        SalesReport {
            total: result.total,
            elapsed,
            errors: result.messages(),
        }
    }

    /// Checks if the report carries an error section.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders the full report text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered report to `path`, replacing any previous file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ReportResult<()> {
        let path = path.as_ref();

        fs::write(path, self.render()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            errors = self.errors.len(),
            "Sales report written"
        );
        Ok(())
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total de ventas: ${:.2}", self.total)?;
        writeln!(
            f,
            "Tiempo de ejecución: {:.4} segundos",
            self.elapsed.as_secs_f64()
        )?;

        if self.has_errors() {
            writeln!(f)?;
            writeln!(f, "Errores encontrados:")?;
            for error in &self.errors {
                writeln!(f, "{error}")?;
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::RecordError;

    fn clean_result(total: f64) -> ComputationResult {
        ComputationResult {
            total,
            errors: Vec::new(),
            priced_records: 1,
        }
    }

    #[test]
    fn test_render_without_errors() {
        let report = SalesReport::new(&clean_result(2481.86), Duration::from_micros(1500));
        assert_eq!(
            report.render(),
            "Total de ventas: $2481.86\nTiempo de ejecución: 0.0015 segundos\n"
        );
    }

    #[test]
    fn test_render_with_errors() {
        let result = ComputationResult {
            total: 3.0,
            errors: vec![
                RecordError::unknown_product("milk"),
                RecordError::invalid_quantity("-1", "bread"),
            ],
            priced_records: 1,
        };
        let report = SalesReport::new(&result, Duration::ZERO);

        assert_eq!(
            report.render(),
            "Total de ventas: $3.00\n\
             Tiempo de ejecución: 0.0000 segundos\n\
             \n\
             Errores encontrados:\n\
             Producto 'milk' no encontrado en el catálogo.\n\
             Error: '-1' para el producto 'bread'.\n"
        );
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let report = SalesReport::new(&clean_result(3.999), Duration::ZERO);
        assert!(report.render().starts_with("Total de ventas: $4.00\n"));

        let report = SalesReport::new(&clean_result(0.0), Duration::ZERO);
        assert!(report.render().starts_with("Total de ventas: $0.00\n"));
    }

    #[test]
    fn test_write_to_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);
        fs::write(&path, "stale contents that are longer than the report itself\n".repeat(10))
            .unwrap();

        let report = SalesReport::new(&clean_result(10.0), Duration::ZERO);
        report.write_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), report.render());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(RESULTS_FILE_NAME);

        let report = SalesReport::new(&clean_result(1.0), Duration::ZERO);
        let err = report.write_to(&path).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }
}
