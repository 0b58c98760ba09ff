//! Error types for input loading and validation

use thiserror::Error;

/// Errors raised before a projection starts
///
/// The projection itself never fails: degenerate figures are normalized when
/// the report is rendered. Everything here is about input shape and I/O.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Length mismatch for {field}: expected {expected} values, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown line item: {0}")]
    UnknownLineItem(String),

    #[error("Cannot parse '{value}' on line {line}")]
    Parse { line: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
