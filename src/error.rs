//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors (full-export only)
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for expense records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (reading or writing the ledger file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors (CSV/JSON rendering)
    #[error("Export error: {0}")]
    Export(String),
}

impl OutlayError {
    /// Build a validation error for a non-positive amount
    pub fn non_positive_amount(amount: f64) -> Self {
        Self::Validation(format!("amount must be positive (got {})", amount))
    }

    /// Build a validation error for a category outside the fixed set
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::Validation(format!("unknown category: {}", category.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;
