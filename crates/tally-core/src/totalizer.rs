//! # Totalizer Module
//!
//! Prices a sales record against a catalogue.
//!
//! ## Per-Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each record, in order                                              │
//! │                                                                         │
//! │    lookup_price(product) ──── not found ───► errors.push(Unknown...)   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │    validate_quantity ──────── invalid ─────► errors.push(Invalid...)   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │    total += price × quantity                                            │
//! │                                                                         │
//! │  One bad record never stops the pass.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{ComputationResult, PriceCatalogue, SaleRecord};
use crate::validation::{lookup_price, validate_quantity, RecordResult};

/// Computes sales totals against a borrowed catalogue.
///
/// ## Example
/// ```rust
/// use tally_core::{PriceCatalogue, SaleRecord, SalesTotalizer};
///
/// let catalogue = PriceCatalogue::new([("apple", 1.50), ("bread", 2.00)]).unwrap();
/// let records = vec![
///     SaleRecord::new("apple", 2),
///     SaleRecord::new("milk", 1),
///     SaleRecord::new("bread", -1),
/// ];
///
/// let result = SalesTotalizer::new(&catalogue).compute(&records);
/// assert!((result.total - 3.00).abs() < 1e-9);
/// assert_eq!(
///     result.messages(),
///     vec![
///         "Producto 'milk' no encontrado en el catálogo.",
///         "Error: '-1' para el producto 'bread'.",
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SalesTotalizer<'c> {
    catalogue: &'c PriceCatalogue,
}

impl<'c> SalesTotalizer<'c> {
    /// Creates a totalizer bound to `catalogue`.
    pub fn new(catalogue: &'c PriceCatalogue) -> Self {
        SalesTotalizer { catalogue }
    }

    /// Prices a single record.
    ///
    /// ## Returns
    /// * `Ok(amount)` - `price × quantity` for a valid record
    /// * `Err(RecordError)` - the one error this record produces
    pub fn price_record(&self, record: &SaleRecord) -> RecordResult<f64> {
        let (product, price) = lookup_price(self.catalogue, record.product.as_ref())?;
        let quantity = validate_quantity(record.quantity.as_ref(), product)?;
        Ok(price * quantity)
    }

    /// Runs one pass over `records`.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// result, and nothing in a record can make this panic.
    pub fn compute<'r, I>(&self, records: I) -> ComputationResult
    where
        I: IntoIterator<Item = &'r SaleRecord>,
    {
        let mut result = ComputationResult::new();

        for record in records {
            match self.price_record(record) {
                Ok(amount) => {
                    result.total += amount;
                    result.priced_records += 1;
                }
                Err(err) => result.errors.push(err),
            }
        }

        result
    }
}

/// Computes the total of `records` priced against `catalogue`.
///
/// Shorthand for `SalesTotalizer::new(catalogue).compute(records)`.
pub fn compute_total_sales(catalogue: &PriceCatalogue, records: &[SaleRecord]) -> ComputationResult {
    SalesTotalizer::new(catalogue).compute(records)
}

// =============================================================================
// Unit Tests
// =============================================================================
