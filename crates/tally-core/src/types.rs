//! # Domain Types
//!
//! Core domain types used throughout Sales Tally.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │ PriceCatalogue  │   │   SaleRecord    │   │  ComputationResult   │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  name → price   │   │  product (any)  │   │  total (f64)         │  │
//! │  │  prices >= 0    │   │  quantity (any) │   │  errors (ordered)    │  │
//! │  └─────────────────┘   └─────────────────┘   │  priced_records      │  │
//! │                                              └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Loose Records, Strict Catalogue
//! Sale records come from hand-edited files and are kept as raw JSON
//! values so that a bad field becomes a per-record error instead of a
//! failed parse. The catalogue is validated up front: a bad price there
//! would poison every total computed against it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogueError, CoreResult, RecordError};
use crate::validation::validate_price;

// =============================================================================
// Price Catalogue
// =============================================================================

/// Mapping from product name to unit price.
///
/// Deserializes from a JSON object of numbers, e.g.
/// `{"apple": 1.50, "bread": 2.00}`. Every price passes through
/// [`validate_price`], so a catalogue in hand is always usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct PriceCatalogue {
    prices: BTreeMap<String, f64>,
}

impl PriceCatalogue {
    /// Builds a catalogue from `(name, price)` pairs.
    ///
    /// Later duplicates replace earlier ones, matching how a JSON object
    /// with repeated keys is read.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::PriceCatalogue;
    ///
    /// let catalogue = PriceCatalogue::new([("apple", 1.50), ("bread", 2.00)]).unwrap();
    /// assert_eq!(catalogue.price("apple"), Some(1.50));
    /// assert!(PriceCatalogue::new([("apple", -1.0)]).is_err());
    /// ```
    pub fn new<I, S>(prices: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, price) in prices {
            let name = name.into();
            validate_price(&name, price)?;
            map.insert(name, price);
        }
        Ok(PriceCatalogue { prices: map })
    }

    /// Returns the unit price of `product`, if listed.
    #[inline]
    pub fn price(&self, product: &str) -> Option<f64> {
        self.prices.get(product).copied()
    }

    /// Number of listed products.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks if the catalogue lists nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates `(name, price)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

impl TryFrom<BTreeMap<String, f64>> for PriceCatalogue {
    type Error = CatalogueError;

    fn try_from(prices: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        PriceCatalogue::new(prices)
    }
}

impl From<PriceCatalogue> for BTreeMap<String, f64> {
    fn from(catalogue: PriceCatalogue) -> Self {
        catalogue.prices
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One entry of the sales record document.
///
/// Both fields are raw JSON so that missing, `null` or wrong-typed values
/// survive deserialization and are judged by the totalizer. A missing
/// field and an explicit `null` both read as `None`. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product name; expected to be a string key of the catalogue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Value>,

    /// Quantity sold; expected to be a non-negative number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl SaleRecord {
    /// Creates a well-formed record.
    pub fn new(product: impl Into<String>, quantity: impl Into<Value>) -> Self {
        SaleRecord {
            product: Some(Value::String(product.into())),
            quantity: Some(quantity.into()),
        }
    }

    /// Creates a record from arbitrary (possibly missing) field values.
    pub fn from_fields(product: Option<Value>, quantity: Option<Value>) -> Self {
        SaleRecord { product, quantity }
    }

    /// Returns the product name when the field is a string.
    #[inline]
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(Value::as_str)
    }
}

// =============================================================================
// Computation Result
// =============================================================================

/// Outcome of one pass of the totalizer over a sales record.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationResult {
    /// Sum of `price × quantity` over every valid record.
    pub total: f64,

    /// One entry per invalid record, in input order.
    pub errors: Vec<RecordError>,

    /// How many records contributed to `total`.
    pub priced_records: usize,
}

impl ComputationResult {
    /// Empty result: zero total, no errors.
    pub fn new() -> Self {
        ComputationResult {
            total: 0.0,
            errors: Vec::new(),
            priced_records: 0,
        }
    }

    /// Rendered error lines, in input order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Checks if any record was rejected.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Total number of records seen (priced + rejected).
    #[inline]
    pub fn records_seen(&self) -> usize {
        self.priced_records + self.errors.len()
    }
}

impl Default for ComputationResult {
    fn default() -> Self {
        ComputationResult::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalogue_from_json() {
        let catalogue: PriceCatalogue =
            serde_json::from_value(json!({"apple": 1.5, "bread": 2, "water": 0})).unwrap();
        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.price("apple"), Some(1.5));
        assert_eq!(catalogue.price("bread"), Some(2.0));
        assert_eq!(catalogue.price("water"), Some(0.0));
        assert_eq!(catalogue.price("milk"), None);
    }

    #[test]
    fn test_catalogue_rejects_negative_price() {
        let result: Result<PriceCatalogue, _> =
            serde_json::from_value(json!({"apple": 1.5, "bread": -2.0}));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bread"));
    }

    #[test]
    fn test_catalogue_rejects_non_numeric_price() {
        let result: Result<PriceCatalogue, _> = serde_json::from_value(json!({"apple": "1.50"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_catalogue_iter_is_name_ordered() {
        let catalogue = PriceCatalogue::new([("b", 2.0), ("a", 1.0)]).unwrap();
        let names: Vec<&str> = catalogue.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_sale_record_missing_and_null_fields() {
        let records: Vec<SaleRecord> = serde_json::from_value(json!([
            {"product": "apple"},
            {"product": null, "quantity": 2},
            {"quantity": "x", "note": "ignored"}
        ]))
        .unwrap();

        assert_eq!(records[0].product_name(), Some("apple"));
        assert_eq!(records[0].quantity, None);
        assert_eq!(records[1].product, None);
        assert_eq!(records[1].quantity, Some(json!(2)));
        assert_eq!(records[2].product, None);
        assert_eq!(records[2].quantity, Some(json!("x")));
    }

    #[test]
    fn test_sale_record_non_string_product_has_no_name() {
        let record = SaleRecord::from_fields(Some(json!(42)), Some(json!(1)));
        assert_eq!(record.product_name(), None);
    }

    #[test]
    fn test_result_defaults() {
        let result = ComputationResult::default();
        assert_eq!(result.total, 0.0);
        assert!(!result.has_errors());
        assert_eq!(result.records_seen(), 0);
        assert!(result.messages().is_empty());
    }
}
