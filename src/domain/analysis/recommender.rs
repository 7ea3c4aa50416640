//! Recommender - Selects the top valid option and derives a confidence value.

use serde::Serialize;
use std::cmp::Ordering;

use super::AnalysisSettings;
use crate::domain::comparison::{CriteriaSet, EvaluatedOption};

/// Reason reported when every option fails its constraints.
pub const NO_VALID_OPTIONS_REASON: &str = "no options meet constraints";

/// The engine's recommendation.
///
/// `choice` is `None` when no option satisfies the constraints; that is a
/// reportable outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Id of the recommended option.
    pub choice: Option<String>,
    pub reason: String,
    /// How decisively the choice beats the runner-up, in `[0.5, 1.0]`.
    pub confidence: f64,
    /// Ids of the options to consider instead of, or after, the choice.
    pub alternatives: Vec<String>,
}

impl Recommendation {
    /// Returns true if an option was recommended.
    pub fn has_choice(&self) -> bool {
        self.choice.is_some()
    }
}

/// Ranking and selection over evaluated options.
pub struct Recommender;

impl Recommender {
    /// Selects the recommended option.
    ///
    /// # Algorithm
    /// - valid = options meeting constraints
    /// - choice = argmax total_score over valid, first occurrence wins ties
    /// - confidence = min(0.5 + gap / K, 1.0), gap to the second-best valid
    ///
    /// # Edge Cases
    /// - No valid options: no choice, first options of the full set as alternatives
    /// - Single valid option: confidence 1.0
    pub fn select(
        evaluated: &[EvaluatedOption],
        criteria: &CriteriaSet,
        settings: &AnalysisSettings,
    ) -> Recommendation {
        let ranked = Self::rank_valid(evaluated);

        let Some(best) = ranked.first() else {
            return Recommendation {
                choice: None,
                reason: NO_VALID_OPTIONS_REASON.to_string(),
                confidence: 1.0,
                alternatives: evaluated
                    .iter()
                    .take(settings.alternatives_limit)
                    .map(|o| o.id().to_string())
                    .collect(),
            };
        };

        let confidence = match ranked.get(1) {
            Some(runner_up) => Self::confidence(
                best.total_score - runner_up.total_score,
                settings.confidence_spread,
            ),
            None => 1.0,
        };

        Recommendation {
            choice: Some(best.id().to_string()),
            reason: Self::explain(best, criteria, settings.strong_score_threshold),
            confidence,
            alternatives: ranked
                .iter()
                .skip(1)
                .take(settings.alternatives_limit)
                .map(|o| o.id().to_string())
                .collect(),
        }
    }

    /// Valid options ordered by total score, highest first.
    ///
    /// The sort is stable, so numerically equal totals (including `0.0` and
    /// `-0.0`) keep input order.
    pub fn rank_valid(evaluated: &[EvaluatedOption]) -> Vec<&EvaluatedOption> {
        let mut valid: Vec<&EvaluatedOption> =
            evaluated.iter().filter(|o| o.meets_constraints).collect();
        valid.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });
        valid
    }

    /// Maps a score gap onto `[0.5, 1.0]`.
    pub fn confidence(gap: f64, spread: f64) -> f64 {
        if spread <= 0.0 || !gap.is_finite() {
            return 1.0;
        }
        (0.5 + gap.max(0.0) / spread).min(1.0)
    }

    /// Criteria where the option's raw score reaches the strong threshold.
    pub fn strong_criteria<'a>(
        option: &EvaluatedOption,
        criteria: &'a CriteriaSet,
        threshold: f64,
    ) -> Vec<&'a str> {
        criteria
            .names()
            .filter(|criterion| {
                option
                    .scores
                    .get(criterion)
                    .map(|s| s.is_available() && s.raw.value() >= threshold)
                    .unwrap_or(false)
            })
            .collect()
    }

    fn explain(option: &EvaluatedOption, criteria: &CriteriaSet, threshold: f64) -> String {
        let strong = Self::strong_criteria(option, criteria, threshold);
        let lead = format!(
            "{} has the highest total score ({:.2})",
            option.display_name(),
            option.total_score
        );

        if strong.is_empty() {
            format!("{} without standing out on any single criterion", lead)
        } else {
            format!("{} and is strong in {}", lead, strong.join(", "))
        }
    }
}
