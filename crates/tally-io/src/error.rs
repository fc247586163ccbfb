//! # I/O Error Types
//!
//! Error types for loading input documents and persisting results.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CatalogueError                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LoadError / ReportError (this module) ← Adds path and categorization  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute-sales prints the message and exits non-zero                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use thiserror::Error;

/// Input document loading errors.
///
/// Every variant is fatal for the run: the totalizer is never invoked
/// once either document fails to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Document does not exist.
    #[error("No se encontró el archivo {}.", path.display())]
    NotFound { path: PathBuf },

    /// Document is not valid JSON.
    ///
    /// ## When This Occurs
    /// - Syntax error anywhere in the file
    /// - File is empty or truncated
    #[error("El archivo {} no tiene un formato JSON válido.", path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Document is valid JSON of the wrong shape.
    ///
    /// ## When This Occurs
    /// - Catalogue is not an object of numbers
    /// - Catalogue lists a negative or non-finite price
    /// - Sales record is not an array of objects
    #[error("El archivo {} no tiene la estructura esperada: {source}", path.display())]
    UnexpectedShape {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Any other read failure (permissions, not UTF-8, is a directory...).
    #[error("No se pudo leer el archivo {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// Classifies a failed read of `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Classifies a failed parse of `path`.
    ///
    /// ## Error Mapping
    /// ```text
    /// Category::Syntax | Category::Eof | Category::Io → InvalidJson
    /// Category::Data                                  → UnexpectedShape
    /// ```
    pub fn from_json(path: &Path, source: serde_json::Error) -> Self {
        let path = path.to_path_buf();
        match source.classify() {
            Category::Data => LoadError::UnexpectedShape { path, source },
            _ => LoadError::InvalidJson { path, source },
        }
    }

    /// Path of the document that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::InvalidJson { path, .. }
            | LoadError::UnexpectedShape { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}

/// Results file persistence errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Results file could not be created or written.
    #[error("No se pudo escribir el archivo de resultados {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Result type for document loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for report persistence.
pub type ReportResult<T> = Result<T, ReportError>;
