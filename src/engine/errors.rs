//! Catalog lookup errors
//!
//! Producer-level failures are represented as error-description steps, never
//! as errors; this module only covers the layer above them, where a caller
//! asks for an algorithm or traversal by name before any producer runs.

use std::fmt;

/// Errors from resolving catalog names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No algorithm matches the requested name
    UnknownAlgorithm { name: String },

    /// No traversal strategy matches the requested name
    UnknownTraversal { name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            CatalogError::UnknownTraversal { name } => {
                write!(f, "Unknown traversal strategy '{}'", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
