//! # Validation Module
//!
//! Field-level checks applied to catalogue entries and sale records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Loader (tally-io)                                            │
//! │  ├── JSON syntax                                                       │
//! │  └── Container shape (object of prices, array of records)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalogue construction                                       │
//! │  └── validate_price: finite, non-negative        → fatal               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Totalizer, per record (THIS MODULE)                          │
//! │  ├── lookup_price: product is a catalogue key    → RecordError         │
//! │  └── validate_quantity: non-negative number      → RecordError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use tally_core::validation::validate_quantity;
//!
//! assert_eq!(validate_quantity(Some(&json!(2)), "apple"), Ok(2.0));
//! assert!(validate_quantity(Some(&json!("2")), "apple").is_err());
//! ```

use serde_json::Value;

use crate::error::{CatalogueError, CoreResult, RecordError};
use crate::types::PriceCatalogue;

/// Result type for per-record checks.
pub type RecordResult<T> = Result<T, RecordError>;

// =============================================================================
// Catalogue Validators
// =============================================================================

/// Validates a catalogue unit price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_price;
///
/// assert!(validate_price("apple", 1.50).is_ok());
/// assert!(validate_price("sample", 0.0).is_ok());
/// assert!(validate_price("apple", -0.01).is_err());
/// assert!(validate_price("apple", f64::NAN).is_err());
/// ```
pub fn validate_price(product: &str, price: f64) -> CoreResult<()> {
    if !price.is_finite() {
        return Err(CatalogueError::NonFinitePrice {
            product: product.to_string(),
        });
    }

    if price < 0.0 {
        return Err(CatalogueError::NegativePrice {
            product: product.to_string(),
            price,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Resolves a record's product against the catalogue.
///
/// Only string values can match a catalogue key. Anything else
/// (missing, `null`, numbers, booleans...) is reported as an unknown
/// product using its rendered form.
///
/// ## Returns
/// The product name together with its unit price.
pub fn lookup_price<'r>(
    catalogue: &PriceCatalogue,
    product: Option<&'r Value>,
) -> RecordResult<(&'r str, f64)> {
    let name = product.and_then(Value::as_str);

    match name.and_then(|name| catalogue.price(name).map(|price| (name, price))) {
        Some(found) => Ok(found),
        None => Err(RecordError::unknown_product(render_value(product))),
    }
}

/// Validates a record's quantity.
///
/// ## Rules
/// - Must be a JSON number (integer or floating point)
/// - Must be non-negative; zero is valid and contributes nothing
/// - Must fit a finite `f64`; `1e400` and `-1e400` are rejected
/// - Booleans, strings, `null` and containers are rejected
///
/// ## User Workflow
/// ```text
/// {"product": "bread", "quantity": -1}
///      │
///      ▼
/// lookup_price → ("bread", 2.00)
///      │
///      ▼
/// validate_quantity(-1) ← THIS FUNCTION
///      │
///      ├── not a number? → "Error: '<quantity>' para el producto 'bread'."
///      ├── negative?     → "Error: '-1' para el producto 'bread'."
///      └── OK → 2.00 × quantity added to total
/// ```
pub fn validate_quantity(quantity: Option<&Value>, product: &str) -> RecordResult<f64> {
    let amount = match quantity {
        Some(Value::Number(number)) => number.as_f64(),
        _ => None,
    };

    match amount {
        Some(amount) if amount >= 0.0 => Ok(amount),
        _ => Err(RecordError::invalid_quantity(render_value(quantity), product)),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a raw field value for an error message.
///
/// Strings appear without quotes, a missing field or `null` as `null`,
/// and everything else as its JSON text.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use tally_core::validation::render_value;
///
/// assert_eq!(render_value(Some(&json!("milk"))), "milk");
/// assert_eq!(render_value(Some(&json!(-1))), "-1");
/// assert_eq!(render_value(Some(&json!(true))), "true");
/// assert_eq!(render_value(None), "null");
/// ```
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
