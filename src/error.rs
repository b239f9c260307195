//! Custom error types for bill-splitter
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for bill-splitter operations
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Rejected input (blank names, non-positive amounts, empty sharer sets)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// An expense refers to someone who is not a current participant
    #[error("Unknown participant referenced by {context}: {identifier}")]
    Referential {
        context: String,
        identifier: String,
    },

    /// Group file import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Poisoned lock around a shared ledger
    #[error("Lock error: {0}")]
    Lock(String),
}

impl SplitterError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a referential error for an unknown participant id
    pub fn unknown_participant(context: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::Referential {
            context: context.into(),
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a referential error
    pub fn is_referential(&self) -> bool {
        matches!(self, Self::Referential { .. })
    }
}

impl From<std::io::Error> for SplitterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SplitterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SplitterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for bill-splitter operations
pub type SplitterResult<T> = Result<T, SplitterError>;
