//! Summary Reporter - Distribution statistics across the whole option set.

use serde::Serialize;

use super::Recommender;
use crate::domain::comparison::{CriteriaSet, EvaluatedOption};

/// One entry of the top-choices list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopChoice {
    pub id: String,
    pub total_score: f64,
    /// Criterion with the option's highest raw score.
    pub key_strength: Option<String>,
}

/// Average raw score of one criterion across all options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAverage {
    pub criterion: String,
    pub average_score: f64,
}

/// The option set's collectively strongest criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInsight {
    pub criterion: String,
    pub average_score: f64,
    pub description: String,
}

/// Summary of an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub top_choices: Vec<TopChoice>,
    pub key_insight: Option<KeyInsight>,
    pub average_scores: Vec<CriterionAverage>,
    pub total_options: usize,
    pub valid_options: usize,
}

impl Summary {
    /// The zeroed summary of an empty option set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Summary statistics over evaluated options.
pub struct SummaryReporter;

impl SummaryReporter {
    /// Summarizes the evaluated options.
    ///
    /// # Algorithm
    /// - top choices: valid options by total score, truncated to `limit`
    /// - averages: mean raw score per criterion across all options
    /// - key insight: criterion with the highest average
    ///
    /// # Edge Cases
    /// - Empty input: zeroed summary
    /// - Ties: first criterion in criteria order wins
    pub fn summarize(
        evaluated: &[EvaluatedOption],
        criteria: &CriteriaSet,
        limit: usize,
    ) -> Summary {
        if evaluated.is_empty() {
            return Summary::empty();
        }

        let ranked = Recommender::rank_valid(evaluated);
        let top_choices = ranked
            .iter()
            .take(limit)
            .map(|option| TopChoice {
                id: option.id().to_string(),
                total_score: option.total_score,
                key_strength: Self::key_strength(option, criteria),
            })
            .collect();

        let average_scores = Self::average_scores(evaluated, criteria);
        let key_insight = Self::key_insight(&average_scores);

        Summary {
            top_choices,
            key_insight,
            average_scores,
            total_options: evaluated.len(),
            valid_options: ranked.len(),
        }
    }

    /// Criterion with the option's highest raw score, first one on ties.
    pub fn key_strength(option: &EvaluatedOption, criteria: &CriteriaSet) -> Option<String> {
        let mut best: Option<(&str, f64)> = None;

        for criterion in criteria.names() {
            let raw = option.raw_of(criterion);
            match best {
                Some((_, best_raw)) if raw <= best_raw => {}
                _ => best = Some((criterion, raw)),
            }
        }

        best.map(|(criterion, _)| criterion.to_string())
    }

    /// Mean raw score per criterion across every option, valid or not.
    pub fn average_scores(
        evaluated: &[EvaluatedOption],
        criteria: &CriteriaSet,
    ) -> Vec<CriterionAverage> {
        if evaluated.is_empty() {
            return Vec::new();
        }

        let count = evaluated.len() as f64;
        criteria
            .names()
            .map(|criterion| {
                let total: f64 = evaluated.iter().map(|o| o.raw_of(criterion)).sum();
                CriterionAverage {
                    criterion: criterion.to_string(),
                    average_score: total / count,
                }
            })
            .collect()
    }

    fn key_insight(averages: &[CriterionAverage]) -> Option<KeyInsight> {
        let mut best: Option<&CriterionAverage> = None;

        for average in averages {
            match best {
                Some(current) if average.average_score <= current.average_score => {}
                _ => best = Some(average),
            }
        }

        best.map(|average| KeyInsight {
            criterion: average.criterion.clone(),
            average_score: average.average_score,
            description: format!(
                "Options are collectively strongest in {} (average {:.1}/10)",
                average.criterion, average.average_score
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Aggregator;
    use crate::domain::comparison::{
        ComparisonOption, Constraints, CriterionScore, ScoreCard,
    };
    use crate::domain::foundation::RawScore;

    fn criteria(names: &[&str]) -> CriteriaSet {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        CriteriaSet::resolve(&names, None).unwrap()
    }

    fn option(id: &str, raws: &[f64], set: &CriteriaSet) -> EvaluatedOption {
        let scores: ScoreCard = set
            .iter()
            .zip(raws)
            .map(|(c, raw)| CriterionScore::scored(c.name.clone(), RawScore::new(*raw), c.weight, "test"))
            .collect();
        Aggregator::evaluate(ComparisonOption::new(id), scores, set, &Constraints::none())
    }

    #[test]
    fn empty_input_yields_zeroed_summary() {
        let summary = SummaryReporter::summarize(&[], &criteria(&["cost"]), 3);
        assert_eq!(summary, Summary::empty());
        assert_eq!(summary.total_options, 0);
        assert!(summary.key_insight.is_none());
    }

    #[test]
    fn top_choices_are_sorted_and_truncated() {
        let set = criteria(&["x", "y"]);
        let options = vec![
            option("a", &[2.0, 2.0], &set),
            option("b", &[9.0, 9.0], &set),
            option("c", &[5.0, 5.0], &set),
            option("d", &[7.0, 7.0], &set),
        ];

        let summary = SummaryReporter::summarize(&options, &set, 3);
        let ids: Vec<_> = summary.top_choices.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c"]);
        assert_eq!(summary.total_options, 4);
        assert_eq!(summary.valid_options, 4);
    }

    #[test]
    fn top_choices_exclude_invalid_options() {
        let set = criteria(&["x"]);
        let mut best = option("best", &[10.0], &set);
        best.meets_constraints = false;
        let options = vec![best, option("ok", &[4.0], &set)];

        let summary = SummaryReporter::summarize(&options, &set, 3);
        assert_eq!(summary.top_choices.len(), 1);
        assert_eq!(summary.top_choices[0].id, "ok");
        assert_eq!(summary.valid_options, 1);
    }

    #[test]
    fn key_strength_prefers_first_criterion_on_ties() {
        let set = criteria(&["x", "y", "z"]);
        let evaluated = option("a", &[6.0, 8.0, 8.0], &set);

        assert_eq!(
            SummaryReporter::key_strength(&evaluated, &set),
            Some("y".to_string())
        );
    }

    #[test]
    fn averages_include_invalid_options() {
        let set = criteria(&["x", "y"]);
        let mut invalid = option("a", &[10.0, 0.0], &set);
        invalid.meets_constraints = false;
        let options = vec![invalid, option("b", &[6.0, 4.0], &set)];

        let summary = SummaryReporter::summarize(&options, &set, 3);
        assert_eq!(summary.average_scores[0].average_score, 8.0);
        assert_eq!(summary.average_scores[1].average_score, 2.0);

        let insight = summary.key_insight.unwrap();
        assert_eq!(insight.criterion, "x");
        assert_eq!(
            insight.description,
            "Options are collectively strongest in x (average 8.0/10)"
        );
    }

    #[test]
    fn key_insight_ties_go_to_first_criterion() {
        let set = criteria(&["x", "y"]);
        let options = vec![option("a", &[5.0, 5.0], &set), option("b", &[5.0, 5.0], &set)];

        let summary = SummaryReporter::summarize(&options, &set, 3);
        assert_eq!(summary.key_insight.unwrap().criterion, "x");
    }
}
