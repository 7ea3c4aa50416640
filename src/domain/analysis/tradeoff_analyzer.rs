//! Tradeoff Analyzer - Pairwise comparison surfacing genuine trade-offs.

use serde::Serialize;

use crate::domain::comparison::{CriteriaSet, EvaluatedOption};

/// A pair of options where each leads on a disjoint, non-empty set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradeoff {
    pub option_a: String,
    pub option_b: String,
    /// Criteria where `option_a` leads by more than the margin.
    pub strengths_a: Vec<String>,
    /// Criteria where `option_b` leads by more than the margin.
    pub strengths_b: Vec<String>,
    pub summary: String,
}

/// Per-pair split of differentiating criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairComparison {
    pub strengths_a: Vec<String>,
    pub strengths_b: Vec<String>,
}

impl PairComparison {
    /// Returns true if each side leads somewhere.
    pub fn is_tradeoff(&self) -> bool {
        !self.strengths_a.is_empty() && !self.strengths_b.is_empty()
    }

    /// Returns true if exactly one side leads, on at least one criterion.
    pub fn is_strict_win(&self) -> bool {
        self.strengths_a.is_empty() != self.strengths_b.is_empty()
    }
}

/// Analyzer for pairwise trade-offs between options.
pub struct TradeoffAnalyzer;

impl TradeoffAnalyzer {
    /// Finds trade-offs across every unordered pair of options.
    ///
    /// All options take part regardless of constraint validity. Pairs are
    /// visited in input order with `option_a` preceding `option_b`.
    ///
    /// # Edge Cases
    /// - Fewer than 2 options: Returns empty Vec
    /// - Strict win on every differentiating criterion: pair omitted
    /// - All criteria within the margin: pair omitted
    pub fn analyze(
        evaluated: &[EvaluatedOption],
        criteria: &CriteriaSet,
        margin: f64,
    ) -> Vec<Tradeoff> {
        let mut tradeoffs = Vec::new();

        for (i, a) in evaluated.iter().enumerate() {
            for b in &evaluated[i + 1..] {
                let comparison = Self::compare_pair(a, b, criteria, margin);
                if !comparison.is_tradeoff() {
                    continue;
                }

                tradeoffs.push(Tradeoff {
                    summary: Self::describe(a, b, &comparison),
                    option_a: a.id().to_string(),
                    option_b: b.id().to_string(),
                    strengths_a: comparison.strengths_a,
                    strengths_b: comparison.strengths_b,
                });
            }
        }

        tradeoffs
    }

    /// Splits the criteria where `a` and `b` differ by more than `margin`.
    pub fn compare_pair(
        a: &EvaluatedOption,
        b: &EvaluatedOption,
        criteria: &CriteriaSet,
        margin: f64,
    ) -> PairComparison {
        let mut comparison = PairComparison::default();

        for criterion in criteria.names() {
            let diff = a.raw_of(criterion) - b.raw_of(criterion);
            if diff > margin {
                comparison.strengths_a.push(criterion.to_string());
            } else if diff < -margin {
                comparison.strengths_b.push(criterion.to_string());
            }
        }

        comparison
    }

    fn describe(a: &EvaluatedOption, b: &EvaluatedOption, comparison: &PairComparison) -> String {
        format!(
            "{} leads on {} while {} leads on {}",
            a.display_name(),
            comparison.strengths_a.join(", "),
            b.display_name(),
            comparison.strengths_b.join(", ")
        )
    }
}
