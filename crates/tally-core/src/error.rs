//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── RecordError     - One sale record could not be priced            │
//! │  └── CatalogueError  - The price catalogue itself is unusable         │
//! │                                                                         │
//! │  tally-io errors (separate crate)                                      │
//! │  ├── LoadError       - Document missing or malformed                   │
//! │  └── ReportError     - Results file could not be written               │
//! │                                                                         │
//! │  Flow: RecordError → collected, never raised                           │
//! │        CatalogueError → LoadError → abort run                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product, quantity)
//! 3. Errors are enum variants, never String
//! 4. The `Display` text of a `RecordError` IS the line printed in the report

use thiserror::Error;

// =============================================================================
// Record Error
// =============================================================================

/// A sale record that contributes nothing to the total.
///
/// These are recoverable: the totalizer appends one per offending record
/// and keeps going. The rendered message is what ends up in the
/// "Errores encontrados" section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record's product is not a key of the catalogue.
    ///
    /// ## When This Occurs
    /// - `product` names something the catalogue does not list
    /// - `product` is missing or `null`
    /// - `product` is not a string at all (e.g. a number)
    #[error("Producto '{product}' no encontrado en el catálogo.")]
    UnknownProduct { product: String },

    /// The record's quantity is not a usable amount.
    ///
    /// ## When This Occurs
    /// - `quantity` is missing or `null`
    /// - `quantity` is a string, boolean, array or object
    /// - `quantity` is a negative number
    #[error("Error: '{quantity}' para el producto '{product}'.")]
    InvalidQuantity { quantity: String, product: String },
}

impl RecordError {
    /// Creates an UnknownProduct error from the rendered product value.
    pub fn unknown_product(product: impl Into<String>) -> Self {
        RecordError::UnknownProduct {
            product: product.into(),
        }
    }

    /// Creates an InvalidQuantity error from the rendered quantity and product.
    pub fn invalid_quantity(quantity: impl Into<String>, product: impl Into<String>) -> Self {
        RecordError::InvalidQuantity {
            quantity: quantity.into(),
            product: product.into(),
        }
    }
}

// =============================================================================
// Catalogue Error
// =============================================================================

/// Price catalogue validation errors.
///
/// Raised while building a [`PriceCatalogue`](crate::types::PriceCatalogue);
/// a catalogue that fails here never reaches the totalizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogueError {
    /// Unit price is negative.
    #[error("Precio negativo para el producto '{product}': {price}")]
    NegativePrice { product: String, price: f64 },

    /// Unit price is NaN or infinite.
    #[error("Precio no finito para el producto '{product}'")]
    NonFinitePrice { product: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogueError.
pub type CoreResult<T> = Result<T, CatalogueError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_product_message() {
        let err = RecordError::unknown_product("milk");
        assert_eq!(
            err.to_string(),
            "Producto 'milk' no encontrado en el catálogo."
        );
    }

    #[test]
    fn test_invalid_quantity_message() {
        let err = RecordError::invalid_quantity("-1", "bread");
        assert_eq!(err.to_string(), "Error: '-1' para el producto 'bread'.");
    }

    #[test]
    fn test_catalogue_error_messages() {
        let err = CatalogueError::NegativePrice {
            product: "apple".to_string(),
            price: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Precio negativo para el producto 'apple': -1.5"
        );

        let err = CatalogueError::NonFinitePrice {
            product: "pear".to_string(),
        };
        assert_eq!(err.to_string(), "Precio no finito para el producto 'pear'");
    }
}
