//! Evaluated option - an option with its scores, total and constraint verdict.

use serde::Serialize;

use super::{ComparisonOption, ScoreCard};

/// Derived per-option record, created once per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedOption {
    #[serde(flatten)]
    pub option: ComparisonOption,
    pub scores: ScoreCard,
    /// Sum of the weighted scores over the active criterion set.
    pub total_score: f64,
    pub meets_constraints: bool,
    /// Human-readable reasons the option failed its constraints.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraint_violations: Vec<String>,
}

impl EvaluatedOption {
    pub fn id(&self) -> &str {
        &self.option.id
    }

    pub fn display_name(&self) -> &str {
        self.option.display_name()
    }

    /// Raw score for a criterion; missing criteria read as zero.
    pub fn raw_of(&self, criterion: &str) -> f64 {
        self.scores.raw_of(criterion)
    }
}
