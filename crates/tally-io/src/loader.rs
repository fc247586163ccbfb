//! # Document Loader
//!
//! Reads the price catalogue and the sales record from JSON files.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_inputs(catalogue, sales)                                          │
//! │       │                                                                 │
//! │       ├──► load_catalogue ──► Ok / LoadError ──┐                        │
//! │       │                                        │  both attempted,       │
//! │       └──► load_sales_record ► Ok / LoadError ─┤  every failure kept    │
//! │                                                ▼                        │
//! │                             Ok(SalesInputs) | Err(Vec<LoadError>)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tally_core::{PriceCatalogue, SaleRecord};
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult};

/// Both input documents, loaded and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesInputs {
    pub catalogue: PriceCatalogue,
    pub records: Vec<SaleRecord>,
}

/// Reads and deserializes one JSON document.
///
/// ## Returns
/// * `Ok(T)` - Parsed document
/// * `Err(LoadError::NotFound)` - No file at `path`
/// * `Err(LoadError::InvalidJson)` - Not JSON
/// * `Err(LoadError::UnexpectedShape)` - JSON, but not a `T`
/// * `Err(LoadError::Io)` - Anything else
pub fn load_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> LoadResult<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading JSON document");

    let contents = fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| LoadError::from_json(path, e))
}

/// Loads the price catalogue (a JSON object of product → unit price).
pub fn load_catalogue(path: impl AsRef<Path>) -> LoadResult<PriceCatalogue> {
    let path = path.as_ref();
    let catalogue: PriceCatalogue = load_json_file(path)?;

    info!(
        path = %path.display(),
        products = catalogue.len(),
        "Price catalogue loaded"
    );
    Ok(catalogue)
}

/// Loads the sales record (a JSON array of `{product, quantity}` objects).
pub fn load_sales_record(path: impl AsRef<Path>) -> LoadResult<Vec<SaleRecord>> {
    let path = path.as_ref();
    let records: Vec<SaleRecord> = load_json_file(path)?;

    info!(
        path = %path.display(),
        records = records.len(),
        "Sales record loaded"
    );
    Ok(records)
}

/// Loads both documents, attempting each even when the other fails.
///
/// ## Why Both?
/// A user with two broken files should hear about both in one run.
pub fn load_inputs(
    catalogue_path: impl AsRef<Path>,
    sales_path: impl AsRef<Path>,
) -> Result<SalesInputs, Vec<LoadError>> {
    let catalogue = load_catalogue(catalogue_path);
    let records = load_sales_record(sales_path);

    match (catalogue, records) {
        (Ok(catalogue), Ok(records)) => Ok(SalesInputs { catalogue, records }),
        (catalogue, records) => {
            let errors: Vec<LoadError> = [catalogue.err(), records.err()]
                .into_iter()
                .flatten()
                .collect();
            for err in &errors {
                warn!(path = %err.path().display(), error = %err, "Failed to load document");
            }
            Err(errors)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
