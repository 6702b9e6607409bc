//! Custom error types for budgeteer
//!
//! This module defines the error hierarchy for the codec and the value types
//! it carries, using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budgeteer operations
#[derive(Error, Debug)]
pub enum BudgeteerError {
    /// A read asked for more octets than the stream holds
    #[error("Underflow: requested {requested} bytes, {available} available")]
    Underflow { requested: usize, available: usize },

    /// A bulk write received a missing sequence or string
    #[error("Missing argument: {0}")]
    NullArgument(&'static str),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed record fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BudgeteerError {
    /// Create an underflow error for a read of `requested` octets
    pub fn underflow(requested: usize, available: usize) -> Self {
        Self::Underflow {
            requested,
            available,
        }
    }

    /// Check if this is an underflow error
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }

    /// Check if this is a missing-argument error
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgeteerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgeteerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budgeteer operations
pub type BudgeteerResult<T> = Result<T, BudgeteerError>;
