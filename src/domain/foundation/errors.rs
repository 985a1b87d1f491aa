//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when ranking input fails validation.
///
/// Every variant carries enough positional context (row, column or vector
/// index) for a caller to build a user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Field '{field}' has length {actual}, expected {expected}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid weight: {reason}")]
    InvalidWeight { index: Option<usize>, reason: String },

    #[error("Criterion type at index {index} must be +1 or -1, got {value}")]
    InvalidType { index: usize, value: f64 },

    #[error("Matrix cell at row {row}, column {column} is not finite: {value}")]
    NonFiniteValue { row: usize, column: usize, value: f64 },

    #[error("Matrix cell at row {row}, column {column} is negative ({value}); {method} weighting needs non-negative values")]
    NegativeValue {
        row: usize,
        column: usize,
        value: f64,
        method: &'static str,
    },
}

impl ValidationError {
    /// Creates a shape mismatch error for a named vector or row.
    pub fn shape_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::ShapeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid weight error pointing at a single weight.
    pub fn invalid_weight_at(index: usize, reason: impl Into<String>) -> Self {
        ValidationError::InvalidWeight {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Creates an invalid weight error for the vector as a whole.
    pub fn all_weights_zero() -> Self {
        ValidationError::InvalidWeight {
            index: None,
            reason: "all weights are zero".to_string(),
        }
    }

    /// Returns the error code matching this variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyMatrix => ErrorCode::EmptyMatrix,
            ValidationError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            ValidationError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            ValidationError::InvalidType { .. } => ErrorCode::InvalidType,
            ValidationError::NonFiniteValue { .. } => ErrorCode::NonFiniteValue,
            ValidationError::NegativeValue { .. } => ErrorCode::NegativeValue,
        }
    }
}

/// Display codes for rejected ranking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyMatrix,
    ShapeMismatch,
    InvalidWeight,
    InvalidType,
    NonFiniteValue,
    NegativeValue,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::NonFiniteValue => "NON_FINITE_VALUE",
            ErrorCode::NegativeValue => "NEGATIVE_VALUE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match &err {
            ValidationError::EmptyMatrix => base,
            ValidationError::ShapeMismatch {
                field,
                expected,
                actual,
            } => base
                .with_detail("field", field.clone())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            ValidationError::InvalidWeight { index, .. } => match index {
                Some(index) => base.with_detail("index", index.to_string()),
                None => base,
            },
            ValidationError::InvalidType { index, .. } => {
                base.with_detail("index", index.to_string())
            }
            ValidationError::NonFiniteValue { row, column, .. }
            | ValidationError::NegativeValue { row, column, .. } => base
                .with_detail("row", row.to_string())
                .with_detail("column", column.to_string()),
        }
    }
}
