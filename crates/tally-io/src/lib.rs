//! # tally-io: File Boundary for Sales Tally
//!
//! This crate moves data between the file system and the pure
//! `tally-core` types.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sales Tally Data Flow                            │
//! │                                                                         │
//! │  prices.json      sales.json                                            │
//! │       │                │                                                │
//! │       ▼                ▼                                                │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tally-io (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐                       ┌───────────────┐    │   │
//! │  │   │    loader     │──► tally-core ──────► │    report     │    │   │
//! │  │   │ JSON → types  │    (compute)          │ text → file   │    │   │
//! │  │   └───────────────┘                       └───────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                             SalesResults.txt            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`loader`] - Reading and classifying input documents
//! - [`report`] - Rendering and persisting the sales report
//! - [`error`] - I/O error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;
pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LoadError, LoadResult, ReportError, ReportResult};
pub use loader::{load_catalogue, load_inputs, load_json_file, load_sales_record, SalesInputs};
pub use report::{SalesReport, RESULTS_FILE_NAME};
