//! Evaluation request - the caller-facing input of one comparison.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ComparisonOption, Constraints, CriteriaSet, InputError, MIN_OPTIONS};
use crate::domain::foundation::ValidationError;

/// One comparison request: options, criterion names and constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub options: Vec<ComparisonOption>,
    pub criteria: Vec<String>,
    #[serde(default)]
    pub constraints: Constraints,
}

impl EvaluationRequest {
    /// Creates a request with no constraints.
    pub fn new(options: Vec<ComparisonOption>, criteria: Vec<impl Into<String>>) -> Self {
        Self {
            options,
            criteria: criteria.into_iter().map(Into::into).collect(),
            constraints: Constraints::none(),
        }
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Validates the request and resolves the active criterion set.
    ///
    /// Runs before any scoring so a rejected request performs no work.
    pub fn validate(&self) -> Result<CriteriaSet, InputError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(InputError::too_few_options(self.options.len()));
        }

        let mut seen_ids = HashSet::new();
        for (index, option) in self.options.iter().enumerate() {
            option
                .validate()
                .map_err(|e| InputError::malformed_option(index, e))?;
            if !seen_ids.insert(option.id.as_str()) {
                return Err(InputError::malformed_option(
                    index,
                    ValidationError::duplicate("id", option.id.clone()),
                ));
            }
        }

        self.constraints
            .validate()
            .map_err(InputError::InvalidConstraint)?;

        CriteriaSet::resolve(&self.criteria, self.constraints.weights.as_ref())
    }
}
