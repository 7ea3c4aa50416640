//! Structured rejections for malformed evaluation requests.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Minimum number of options for a meaningful comparison.
pub const MIN_OPTIONS: usize = 2;

/// Input rejected before any scoring work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("At least {required} options required for comparison, got {actual}")]
    TooFewOptions { required: usize, actual: usize },

    #[error("At least one criterion is required")]
    EmptyCriteria,

    #[error("Option at position {index} is malformed: {source}")]
    MalformedOption {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid criterion: {0}")]
    InvalidCriterion(#[source] ValidationError),

    #[error("Invalid weight for criterion '{criterion}': {source}")]
    InvalidWeight {
        criterion: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid constraints: {0}")]
    InvalidConstraint(#[source] ValidationError),
}

impl InputError {
    /// Creates a too-few-options error.
    pub fn too_few_options(actual: usize) -> Self {
        InputError::TooFewOptions {
            required: MIN_OPTIONS,
            actual,
        }
    }

    /// Creates a malformed option error.
    pub fn malformed_option(index: usize, source: ValidationError) -> Self {
        InputError::MalformedOption { index, source }
    }

    /// Creates an invalid weight error.
    pub fn invalid_weight(criterion: impl Into<String>, source: ValidationError) -> Self {
        InputError::InvalidWeight {
            criterion: criterion.into(),
            source,
        }
    }

    /// Returns the machine-readable code for this rejection.
    pub fn code(&self) -> ErrorCode {
        match self {
            InputError::TooFewOptions { .. } => ErrorCode::TooFewOptions,
            InputError::EmptyCriteria => ErrorCode::EmptyCriteria,
            InputError::MalformedOption { .. } => ErrorCode::MalformedOption,
            InputError::InvalidCriterion(_) => ErrorCode::InvalidCriterion,
            InputError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            InputError::InvalidConstraint(_) => ErrorCode::InvalidConstraint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_options_displays_counts() {
        let err = InputError::too_few_options(1);
        assert_eq!(
            err.to_string(),
            "At least 2 options required for comparison, got 1"
        );
        assert_eq!(err.code(), ErrorCode::TooFewOptions);
    }

    #[test]
    fn malformed_option_includes_position_and_cause() {
        let err = InputError::malformed_option(3, ValidationError::empty_field("id"));
        assert_eq!(
            err.to_string(),
            "Option at position 3 is malformed: Field 'id' cannot be empty"
        );
        assert_eq!(err.code(), ErrorCode::MalformedOption);
    }

    #[test]
    fn invalid_weight_names_criterion() {
        let err = InputError::invalid_weight(
            "cost",
            ValidationError::out_of_range("weight", 0.0, 1.0, 2.0),
        );
        assert!(err.to_string().contains("'cost'"));
        assert_eq!(err.code(), ErrorCode::InvalidWeight);
    }
}
