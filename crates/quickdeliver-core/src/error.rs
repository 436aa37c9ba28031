//! Error types for quickdeliver-core
//!
//! Navigation and total calculation never fail. Errors only exist at the
//! edges: preferences on disk, catalog lookups from the CLI/API, and parsing
//! user-supplied tokens.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for QuickDeliver operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Data directory not found")]
    DataDirNotFound,

    // ===================
    // Catalog Errors
    // ===================
    #[error("Store not found: {id}")]
    StoreNotFound { id: String },

    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    // ===================
    // Input Errors
    // ===================
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Invalid quantity {quantity} for product {id} (must be at least 1)")]
    InvalidQuantity { id: String, quantity: u32 },

    #[error("Invalid rating threshold '{input}' (expected one of 4.5+, 4.0+, 3.5+)")]
    InvalidRatingThreshold { input: String },

    #[error("Unknown delivery tier '{input}' (expected standard or express)")]
    UnknownDeliveryTier { input: String },
}

impl CoreError {
    /// True for lookups that missed, as opposed to I/O or parse failures
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::StoreNotFound { .. }
                | CoreError::ProductNotFound { .. }
                | CoreError::OrderNotFound { .. }
        )
    }

    /// Actionable hint for the CLI, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::DataDirNotFound => {
                Some("Pass --data-dir or set QUICKDELIVER_DATA_DIR".to_string())
            }
            CoreError::StoreNotFound { .. } => {
                Some("List known stores with: quickdeliver stores".to_string())
            }
            CoreError::OrderNotFound { .. } => {
                Some("List known orders with: quickdeliver orders".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(CoreError::StoreNotFound { id: "9".into() }.is_not_found());
        assert!(CoreError::OrderNotFound { id: "#1".into() }.is_not_found());
        assert!(!CoreError::DataDirNotFound.is_not_found());
    }

    #[test]
    fn test_suggestions() {
        let err = CoreError::StoreNotFound { id: "42".into() };
        assert!(err.suggestion().unwrap().contains("quickdeliver stores"));

        let err = CoreError::InvalidRatingThreshold { input: "9".into() };
        assert!(err.suggestion().is_none());
        assert!(err.to_string().contains("4.5+"));
    }
}
