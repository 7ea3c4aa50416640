//! Comparison result - Composition of all analysis components.

use serde::Serialize;

use super::{
    Aggregator, AnalysisSettings, InvariantViolation, Recommendation, Recommender, Summary,
    SummaryReporter, Tradeoff, TradeoffAnalyzer,
};
use crate::domain::comparison::{
    ComparisonOption, Constraints, CriteriaSet, EvaluatedOption, ScoreCard,
};

/// The sole output of an evaluation.
///
/// Fully reconstructable from the inputs given deterministic scorers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Every option in input order, including those failing constraints.
    pub comparison: Vec<EvaluatedOption>,
    pub recommendation: Recommendation,
    pub tradeoffs: Vec<Tradeoff>,
    pub summary: Summary,
}

/// Pure composition of aggregation, filtering, ranking and reporting.
pub struct ComparisonAnalysis;

impl ComparisonAnalysis {
    /// Builds the comparison result from already-scored options.
    ///
    /// Options keep their input order. Each total is re-checked against its
    /// weighted scores before ranking.
    pub fn compose(
        scored: Vec<(ComparisonOption, ScoreCard)>,
        criteria: &CriteriaSet,
        constraints: &Constraints,
        settings: &AnalysisSettings,
    ) -> Result<ComparisonResult, InvariantViolation> {
        let comparison: Vec<EvaluatedOption> = scored
            .into_iter()
            .map(|(option, scores)| Aggregator::evaluate(option, scores, criteria, constraints))
            .collect();

        for evaluated in &comparison {
            Aggregator::verify(evaluated, criteria)?;
        }

        let recommendation = Recommender::select(&comparison, criteria, settings);
        let tradeoffs = TradeoffAnalyzer::analyze(&comparison, criteria, settings.tradeoff_margin);
        let summary = SummaryReporter::summarize(&comparison, criteria, settings.top_choices_limit);

        Ok(ComparisonResult {
            comparison,
            recommendation,
            tradeoffs,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::CriterionScore;
    use crate::domain::foundation::RawScore;

    fn scored(
        set: &CriteriaSet,
        id: &str,
        cost: f64,
        raws: &[f64],
    ) -> (ComparisonOption, ScoreCard) {
        let scores = set
            .iter()
            .zip(raws)
            .map(|(c, raw)| CriterionScore::scored(c.name.clone(), RawScore::new(*raw), c.weight, "test"))
            .collect();
        (ComparisonOption::new(id).with_cost(cost), scores)
    }

    #[test]
    fn compose_keeps_excluded_options_in_comparison() {
        let set = CriteriaSet::resolve(&["quality".to_string()], None).unwrap();
        let constraints = Constraints::none().with_max_cost(50.0);
        let input = vec![
            scored(&set, "a", 100.0, &[9.0]),
            scored(&set, "b", 40.0, &[4.0]),
        ];

        let result =
            ComparisonAnalysis::compose(input, &set, &constraints, &AnalysisSettings::default())
                .unwrap();

        assert_eq!(result.comparison.len(), 2);
        assert!(!result.comparison[0].meets_constraints);
        assert_eq!(result.recommendation.choice.as_deref(), Some("b"));
    }

    #[test]
    fn compose_serializes_canonical_shape() {
        let set = CriteriaSet::resolve(&["quality".to_string(), "cost".to_string()], None).unwrap();
        let input = vec![
            scored(&set, "a", 10.0, &[9.0, 2.0]),
            scored(&set, "b", 20.0, &[3.0, 8.0]),
        ];

        let result = ComparisonAnalysis::compose(
            input,
            &set,
            &Constraints::none(),
            &AnalysisSettings::default(),
        )
        .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["comparison"][0]["totalScore"].is_number());
        assert_eq!(json["comparison"][0]["meetsConstraints"], true);
        assert_eq!(json["comparison"][0]["scores"]["quality"]["raw"], 9.0);
        assert!(json["recommendation"]["confidence"].is_number());
        assert_eq!(json["tradeoffs"][0]["strengthsA"][0], "quality");
        assert_eq!(json["summary"]["topChoices"][0]["id"], "a");
    }
}
