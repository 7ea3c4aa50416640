//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' has duplicate value '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Machine-readable error codes for structured rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    TooFewOptions,
    EmptyCriteria,
    MalformedOption,
    InvalidCriterion,
    InvalidWeight,
    InvalidConstraint,

    // Scorer errors
    ScorerUnavailable,
    ScorerTimeout,

    // Internal errors
    InvariantViolated,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::TooFewOptions => "TOO_FEW_OPTIONS",
            ErrorCode::EmptyCriteria => "EMPTY_CRITERIA",
            ErrorCode::MalformedOption => "MALFORMED_OPTION",
            ErrorCode::InvalidCriterion => "INVALID_CRITERION",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidConstraint => "INVALID_CONSTRAINT",
            ErrorCode::ScorerUnavailable => "SCORER_UNAVAILABLE",
            ErrorCode::ScorerTimeout => "SCORER_TIMEOUT",
            ErrorCode::InvariantViolated => "INVARIANT_VIOLATED",
        };
        write!(f, "{}", s)
    }
}
