//! # tally-core: Pure Business Logic for Sales Tally
//!
//! This crate is the **heart** of Sales Tally. It prices a sales record
//! against a catalogue as a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sales Tally Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    compute-sales (CLI)                          │   │
//! │  │    args ──► load ──► compute ──► report ──► exit code           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-io (loader, report)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ totalizer  │  │ validation│  │  error   │  │   │
//! │  │   │ Catalogue │  │   Sales    │  │  price    │  │  Record  │  │   │
//! │  │   │  Record   │  │ Totalizer  │  │  quantity │  │  Error   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO CLOCKS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PriceCatalogue, SaleRecord, ComputationResult)
//! - [`totalizer`] - The per-record pricing pass
//! - [`validation`] - Price and quantity rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, inputs never mutated
//! 2. **No I/O**: file system, printing and timing live in other crates
//! 3. **Collect, Don't Raise**: a bad record becomes an error entry, the
//!    pass always completes
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{compute_total_sales, PriceCatalogue, SaleRecord};
//!
//! let catalogue = PriceCatalogue::new([("apple", 1.50)]).unwrap();
//! let records = vec![SaleRecord::new("apple", 4)];
//!
//! let result = compute_total_sales(&catalogue, &records);
//! assert_eq!(result.total, 6.0);
//! assert!(result.errors.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod totalizer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CatalogueError, CoreResult, RecordError};
pub use totalizer::{compute_total_sales, SalesTotalizer};
pub use types::*;
