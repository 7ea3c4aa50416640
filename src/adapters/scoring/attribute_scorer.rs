//! Attribute Scorer - Scores options from their own numeric attributes.
//!
//! Each criterion maps to a `ScoringRule` describing how an attribute value
//! becomes a raw 0-10 score. Criteria without a rule read the attribute of
//! the same name directly.
//!
//! # Example
//!
//! ```ignore
//! let scorer = AttributeScorer::new()
//!     .with_rule("cost", ScoringRule::inverse_linear("cost", 20.0));
//!
//! // An option with cost 50 scores 10 - 50/20 = 7.5 on "cost".
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::comparison::{ComparisonOption, Constraints};
use crate::domain::foundation::RawScore;
use crate::ports::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};

/// How one criterion's raw score is derived from an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// The attribute value is the raw score.
    Direct { attribute: String },
    /// `10 - value / divisor`, so lower values score higher.
    InverseLinear { attribute: String, divisor: f64 },
    /// `value / max * 10`, mapping `[0, max]` onto the raw scale.
    Scaled { attribute: String, max: f64 },
    /// Constant raw score regardless of the option.
    Fixed { raw: f64 },
}

impl ScoringRule {
    pub fn direct(attribute: impl Into<String>) -> Self {
        ScoringRule::Direct {
            attribute: attribute.into(),
        }
    }

    pub fn inverse_linear(attribute: impl Into<String>, divisor: f64) -> Self {
        ScoringRule::InverseLinear {
            attribute: attribute.into(),
            divisor,
        }
    }

    pub fn scaled(attribute: impl Into<String>, max: f64) -> Self {
        ScoringRule::Scaled {
            attribute: attribute.into(),
            max,
        }
    }

    pub fn fixed(raw: f64) -> Self {
        ScoringRule::Fixed { raw }
    }

    /// Applies the rule to an option. Results are clipped to the raw scale.
    pub fn apply(&self, option: &ComparisonOption) -> Result<ScoreOutcome, ScorerError> {
        match self {
            ScoringRule::Direct { attribute } => {
                let value = Self::read(option, attribute)?;
                Ok(ScoreOutcome::new(
                    RawScore::new(value),
                    format!("{} is {}", attribute, value),
                ))
            }
            ScoringRule::InverseLinear { attribute, divisor } => {
                if divisor.is_nan() || *divisor <= 0.0 {
                    return Err(ScorerError::unavailable(format!(
                        "divisor for '{}' must be positive",
                        attribute
                    )));
                }
                let value = Self::read(option, attribute)?;
                Ok(ScoreOutcome::new(
                    RawScore::new(10.0 - value / divisor),
                    format!("{} of {} scored inversely (divisor {})", attribute, value, divisor),
                ))
            }
            ScoringRule::Scaled { attribute, max } => {
                if max.is_nan() || *max <= 0.0 {
                    return Err(ScorerError::unavailable(format!(
                        "scale maximum for '{}' must be positive",
                        attribute
                    )));
                }
                let value = Self::read(option, attribute)?;
                Ok(ScoreOutcome::new(
                    RawScore::new(value / max * 10.0),
                    format!("{} of {} scaled against {}", attribute, value, max),
                ))
            }
            ScoringRule::Fixed { raw } => {
                Ok(ScoreOutcome::new(RawScore::new(*raw), "fixed score"))
            }
        }
    }

    fn read(option: &ComparisonOption, attribute: &str) -> Result<f64, ScorerError> {
        option
            .numeric_attribute(attribute)
            .ok_or_else(|| ScorerError::missing_attribute(&option.id, attribute))
    }
}

/// Deterministic scorer driven by per-criterion rules.
#[derive(Debug, Clone, Default)]
pub struct AttributeScorer {
    rules: BTreeMap<String, ScoringRule>,
}

impl AttributeScorer {
    /// Creates a scorer that reads every criterion directly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer from a criterion-to-rule table.
    pub fn from_rules(rules: BTreeMap<String, ScoringRule>) -> Self {
        Self { rules }
    }

    /// Sets the rule for one criterion.
    pub fn with_rule(mut self, criterion: impl Into<String>, rule: ScoringRule) -> Self {
        self.rules.insert(criterion.into(), rule);
        self
    }

    /// Returns the rule used for a criterion.
    pub fn rule_for(&self, criterion: &str) -> ScoringRule {
        self.rules
            .get(criterion)
            .cloned()
            .unwrap_or_else(|| ScoringRule::direct(criterion))
    }
}

#[async_trait]
impl DomainScorer for AttributeScorer {
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        _constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError> {
        self.rule_for(criterion).apply(option)
    }

    fn scorer_info(&self) -> ScorerInfo {
        ScorerInfo::new("attribute")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option() -> ComparisonOption {
        ComparisonOption::new("a")
            .with_cost(70.0)
            .with_attribute("performance", 7)
            .with_attribute("uptime", 99.5)
    }

    #[tokio::test]
    async fn criterion_without_rule_reads_attribute_directly() {
        let scorer = AttributeScorer::new();
        let outcome = scorer
            .score(&option(), "performance", &Constraints::none())
            .await
            .unwrap();

        assert_eq!(outcome.raw.value(), 7.0);
    }

    #[tokio::test]
    async fn inverse_linear_scores_cost_field() {
        let scorer = AttributeScorer::new().with_rule("cost", ScoringRule::inverse_linear("cost", 20.0));
        let outcome = scorer
            .score(&option(), "cost", &Constraints::none())
            .await
            .unwrap();

        assert_eq!(outcome.raw.value(), 6.5);
    }

    #[test]
    fn results_are_clipped_to_raw_scale() {
        let expensive = ComparisonOption::new("x").with_cost(500.0);
        let outcome = ScoringRule::inverse_linear("cost", 20.0).apply(&expensive).unwrap();
        assert_eq!(outcome.raw.value(), 0.0);

        let outcome = ScoringRule::direct("uptime").apply(&option()).unwrap();
        assert_eq!(outcome.raw.value(), 10.0);
    }

    #[test]
    fn scaled_maps_range_onto_raw_scale() {
        let outcome = ScoringRule::scaled("performance", 14.0).apply(&option()).unwrap();
        assert_eq!(outcome.raw.value(), 5.0);
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = ScoringRule::direct("latency").apply(&option()).unwrap_err();
        assert_eq!(err, ScorerError::missing_attribute("a", "latency"));
    }

    #[test]
    fn non_positive_divisor_is_unavailable() {
        let err = ScoringRule::inverse_linear("cost", 0.0).apply(&option()).unwrap_err();
        assert!(matches!(err, ScorerError::Unavailable(_)));
    }

    #[test]
    fn rules_deserialize_from_tagged_form() {
        let json = r#"{
            "cost": { "kind": "inverse_linear", "attribute": "cost", "divisor": 20 },
            "support": { "kind": "fixed", "raw": 6 }
        }"#;
        let rules: BTreeMap<String, ScoringRule> = serde_json::from_str(json).unwrap();
        let scorer = AttributeScorer::from_rules(rules);

        assert_eq!(scorer.rule_for("cost"), ScoringRule::inverse_linear("cost", 20.0));
        assert_eq!(scorer.rule_for("support"), ScoringRule::fixed(6.0));
        assert_eq!(scorer.rule_for("speed"), ScoringRule::direct("speed"));
    }
}
