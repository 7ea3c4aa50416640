//! Aggregator - Combines per-criterion scores into a total weighted score.

use thiserror::Error;

use super::ConstraintFilter;
use crate::domain::comparison::{
    ComparisonOption, Constraints, CriteriaSet, EvaluatedOption, ScoreCard,
};
use crate::domain::foundation::ErrorCode;

/// Absolute tolerance when re-checking a total against its parts.
const SUM_TOLERANCE: f64 = 1e-9;

/// A stored total does not match the sum of its weighted scores.
///
/// Signals an implementation bug, never a runtime condition.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Total score for option '{option_id}' is {actual}, expected {expected}")]
pub struct InvariantViolation {
    pub option_id: String,
    pub expected: f64,
    pub actual: f64,
}

impl InvariantViolation {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvariantViolated
    }
}

/// Weighted-sum aggregation.
pub struct Aggregator;

impl Aggregator {
    /// Computes the total score of an option.
    ///
    /// # Algorithm
    /// total = Σ weighted[criterion] over the active criterion set
    ///
    /// # Edge Cases
    /// - Missing criterion: contributes 0
    /// - Extra criteria on the card: ignored
    /// - No clamping, no normalization against other options
    pub fn total_score(scores: &ScoreCard, criteria: &CriteriaSet) -> f64 {
        criteria
            .names()
            .map(|criterion| scores.weighted_of(criterion))
            .sum()
    }

    /// Builds the evaluated record for an option.
    pub fn evaluate(
        option: ComparisonOption,
        scores: ScoreCard,
        criteria: &CriteriaSet,
        constraints: &Constraints,
    ) -> EvaluatedOption {
        let total_score = Self::total_score(&scores, criteria);
        let constraint_violations = ConstraintFilter::violations(&option, constraints);

        EvaluatedOption {
            meets_constraints: constraint_violations.is_empty(),
            constraint_violations,
            option,
            scores,
            total_score,
        }
    }

    /// Re-derives the total from the score card entries and compares.
    pub fn verify(
        evaluated: &EvaluatedOption,
        criteria: &CriteriaSet,
    ) -> Result<(), InvariantViolation> {
        let expected: f64 = evaluated
            .scores
            .iter()
            .filter(|score| criteria.contains(&score.criterion))
            .map(|score| score.weighted)
            .sum();

        if (expected - evaluated.total_score).abs() > SUM_TOLERANCE {
            return Err(InvariantViolation {
                option_id: evaluated.id().to_string(),
                expected,
                actual: evaluated.total_score,
            });
        }
        Ok(())
    }
}
