//! DecisionEngine - Orchestrates scoring and analysis of one comparison.
//!
//! Validates the request, fans scoring calls out to the injected
//! `DomainScorer`, then hands the scored options to the pure analysis layer.
//!
//! # Concurrency
//!
//! Every (option, criterion) pair is scored concurrently, gated by a
//! per-evaluation semaphore and bounded by a timeout. All calls are joined
//! before aggregation. A failed or timed-out call becomes an "unavailable"
//! score of 0 instead of failing the comparison.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::analysis::{
    AnalysisSettings, ComparisonAnalysis, ComparisonResult, InvariantViolation,
};
use crate::domain::comparison::{
    ComparisonOption, Constraints, CriteriaSet, Criterion, CriterionScore, EvaluationRequest,
    InputError, ScoreCard,
};
use crate::domain::foundation::ErrorCode;
use crate::ports::{DomainScorer, ScorerError, ScorerInfo};

/// Default bound on a single scorer call.
pub const DEFAULT_SCORER_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default number of scorer calls in flight per evaluation.
pub const DEFAULT_MAX_CONCURRENT_SCORES: usize = 16;

/// Runtime settings for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub scorer_timeout: Duration,
    pub max_concurrent_scores: usize,
    pub analysis: AnalysisSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            scorer_timeout: DEFAULT_SCORER_TIMEOUT,
            max_concurrent_scores: DEFAULT_MAX_CONCURRENT_SCORES,
            analysis: AnalysisSettings::default(),
        }
    }
}

/// Errors that abort an evaluation.
///
/// Scorer failures never surface here; they degrade to unavailable scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Invalid evaluation request: {0}")]
    Input(#[from] InputError),

    #[error("Computation invariant violated: {0}")]
    InvariantViolated(#[from] InvariantViolation),
}

impl EvaluationError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::Input(err) => err.code(),
            EvaluationError::InvariantViolated(err) => err.code(),
        }
    }
}

/// Stateless multi-criteria decision engine.
///
/// Holds no per-evaluation state, so one engine can serve concurrent
/// evaluations.
pub struct DecisionEngine {
    scorer: Arc<dyn DomainScorer>,
    settings: EngineSettings,
}

impl DecisionEngine {
    /// Creates an engine with default settings.
    pub fn new(scorer: Arc<dyn DomainScorer>) -> Self {
        Self::with_settings(scorer, EngineSettings::default())
    }

    /// Creates an engine with explicit settings.
    pub fn with_settings(scorer: Arc<dyn DomainScorer>, settings: EngineSettings) -> Self {
        Self { scorer, settings }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Evaluates one comparison request.
    ///
    /// Input is validated before any scorer call is made.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ComparisonResult, EvaluationError> {
        let evaluation_id = Uuid::new_v4();

        let criteria = request.validate().map_err(|err| {
            warn!(
                evaluation_id = %evaluation_id,
                error_code = %err.code(),
                error = %err,
                "Rejected evaluation request"
            );
            err
        })?;

        let scorer_info = self.scorer.scorer_info();
        info!(
            evaluation_id = %evaluation_id,
            scorer = %scorer_info.name,
            options = request.options.len(),
            criteria = criteria.len(),
            "Evaluating options"
        );

        let semaphore = Semaphore::new(self.settings.max_concurrent_scores.max(1));
        let cards = join_all(request.options.iter().map(|option| {
            self.score_option(
                option,
                &criteria,
                &request.constraints,
                &scorer_info,
                &semaphore,
                evaluation_id,
            )
        }))
        .await;

        let unavailable_scores: usize = cards.iter().map(ScoreCard::unavailable_count).sum();
        let scored: Vec<(ComparisonOption, ScoreCard)> =
            request.options.iter().cloned().zip(cards).collect();

        let result = ComparisonAnalysis::compose(
            scored,
            &criteria,
            &request.constraints,
            &self.settings.analysis,
        )
        .map_err(|err| {
            warn!(
                evaluation_id = %evaluation_id,
                option_id = %err.option_id,
                "Aggregated total does not match weighted scores"
            );
            err
        })?;

        info!(
            evaluation_id = %evaluation_id,
            choice = result.recommendation.choice.as_deref().unwrap_or("none"),
            confidence = result.recommendation.confidence,
            valid_options = result.summary.valid_options,
            tradeoffs = result.tradeoffs.len(),
            unavailable_scores,
            "Evaluation complete"
        );

        Ok(result)
    }

    /// Scores one option on every active criterion, in criteria order.
    async fn score_option(
        &self,
        option: &ComparisonOption,
        criteria: &CriteriaSet,
        constraints: &Constraints,
        scorer_info: &ScorerInfo,
        semaphore: &Semaphore,
        evaluation_id: Uuid,
    ) -> ScoreCard {
        let scores = join_all(criteria.iter().map(|criterion| {
            self.score_criterion(
                option,
                criterion,
                constraints,
                scorer_info,
                semaphore,
                evaluation_id,
            )
        }))
        .await;

        scores.into_iter().collect()
    }

    async fn score_criterion(
        &self,
        option: &ComparisonOption,
        criterion: &Criterion,
        constraints: &Constraints,
        scorer_info: &ScorerInfo,
        semaphore: &Semaphore,
        evaluation_id: Uuid,
    ) -> CriterionScore {
        if !scorer_info.supports(&criterion.name) {
            let err = ScorerError::unsupported(scorer_info.name.as_str(), criterion.name.as_str());
            debug!(
                evaluation_id = %evaluation_id,
                option_id = %option.id,
                criterion = %criterion.name,
                "Skipping criterion the scorer does not support"
            );
            return CriterionScore::unavailable(
                criterion.name.as_str(),
                criterion.weight,
                err.to_string(),
            );
        }

        let _permit = match semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                return CriterionScore::unavailable(
                    criterion.name.as_str(),
                    criterion.weight,
                    "scoring pool closed",
                )
            }
        };

        let call = self.scorer.score(option, &criterion.name, constraints);
        let outcome = match timeout(self.settings.scorer_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ScorerError::Timeout {
                timeout_ms: self.settings.scorer_timeout.as_millis() as u64,
            }),
        };

        match outcome {
            Ok(outcome) => {
                debug!(
                    evaluation_id = %evaluation_id,
                    option_id = %option.id,
                    criterion = %criterion.name,
                    raw = outcome.raw.value(),
                    "Scored criterion"
                );
                CriterionScore::scored(
                    criterion.name.as_str(),
                    outcome.raw,
                    criterion.weight,
                    outcome.explanation,
                )
            }
            Err(err) => {
                warn!(
                    evaluation_id = %evaluation_id,
                    option_id = %option.id,
                    criterion = %criterion.name,
                    error_code = %err.code(),
                    error = %err,
                    "Scorer failed, recording unavailable score"
                );
                CriterionScore::unavailable(criterion.name.as_str(), criterion.weight, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::{MockDomainScorer, RoutingScorer};
    use crate::domain::comparison::ScoreStatus;

    fn request(ids: &[&str], criteria: &[&str]) -> EvaluationRequest {
        EvaluationRequest::new(
            ids.iter().map(|id| ComparisonOption::new(*id)).collect(),
            criteria.to_vec(),
        )
    }

    #[tokio::test]
    async fn invalid_request_makes_no_scorer_calls() {
        let scorer = MockDomainScorer::new();
        let engine = DecisionEngine::new(Arc::new(scorer.clone()));

        let err = engine.evaluate(&request(&["a"], &["cost"])).await.unwrap_err();

        assert_eq!(
            err,
            EvaluationError::Input(InputError::too_few_options(1))
        );
        assert_eq!(err.code(), ErrorCode::TooFewOptions);
        assert_eq!(scorer.call_count(), 0);
    }

    #[tokio::test]
    async fn scores_every_option_on_every_criterion() {
        let scorer = MockDomainScorer::new();
        let engine = DecisionEngine::new(Arc::new(scorer.clone()));

        let result = engine
            .evaluate(&request(&["a", "b", "c"], &["cost", "speed"]))
            .await
            .unwrap();

        assert_eq!(scorer.call_count(), 6);
        assert_eq!(result.comparison.len(), 3);
        let criteria: Vec<&str> = result.comparison[0]
            .scores
            .iter()
            .map(|s| s.criterion.as_str())
            .collect();
        assert_eq!(criteria, vec!["cost", "speed"]);
    }

    #[tokio::test]
    async fn scorer_failure_becomes_unavailable_score() {
        let scorer = MockDomainScorer::new()
            .with_score("a", "cost", 9.0)
            .with_failure("b", "cost", ScorerError::unavailable("quota exceeded"));
        let engine = DecisionEngine::new(Arc::new(scorer));

        let result = engine.evaluate(&request(&["a", "b"], &["cost"])).await.unwrap();

        let failed = result.comparison[1].scores.get("cost").unwrap();
        assert_eq!(failed.status, ScoreStatus::Unavailable);
        assert_eq!(failed.raw.value(), 0.0);
        assert!(failed.explanation.contains("quota exceeded"));
        assert_eq!(result.recommendation.choice.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn slow_scorer_times_out_to_unavailable() {
        let scorer = MockDomainScorer::new().with_delay_for("b", "cost", Duration::from_secs(30));
        let settings = EngineSettings {
            scorer_timeout: Duration::from_millis(20),
            ..EngineSettings::default()
        };
        let engine = DecisionEngine::with_settings(Arc::new(scorer), settings);

        let result = engine.evaluate(&request(&["a", "b"], &["cost"])).await.unwrap();

        let timed_out = result.comparison[1].scores.get("cost").unwrap();
        assert!(!timed_out.is_available());
        assert!(timed_out.explanation.contains("timed out after 20ms"));
        assert!(result.comparison[0].scores.get("cost").unwrap().is_available());
    }

    #[tokio::test]
    async fn concurrency_is_bounded_by_settings() {
        let scorer = MockDomainScorer::new().with_delay(Duration::from_millis(5));
        let settings = EngineSettings {
            max_concurrent_scores: 2,
            ..EngineSettings::default()
        };
        let engine = DecisionEngine::with_settings(Arc::new(scorer.clone()), settings);

        engine
            .evaluate(&request(&["a", "b", "c", "d"], &["cost", "speed"]))
            .await
            .unwrap();

        assert_eq!(scorer.call_count(), 8);
        assert!(scorer.max_in_flight() <= 2);
    }

    #[tokio::test]
    async fn negative_zero_score_keeps_input_order_tie_break() {
        let scorer = MockDomainScorer::new()
            .with_score("first", "q", -0.0)
            .with_score("second", "q", 0.0);
        let engine = DecisionEngine::new(Arc::new(scorer));

        let result = engine.evaluate(&request(&["first", "second"], &["q"])).await.unwrap();

        assert_eq!(result.recommendation.choice.as_deref(), Some("first"));
        let top: Vec<&str> = result.summary.top_choices.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(top, vec!["first", "second"]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("-0.0"));
    }

    #[tokio::test]
    async fn unsupported_criterion_is_skipped_without_a_call() {
        let routed = MockDomainScorer::new().with_default_score(8.0);
        let scorer = RoutingScorer::new().route("speed", Arc::new(routed.clone()));
        let engine = DecisionEngine::new(Arc::new(scorer));

        let result = engine
            .evaluate(&request(&["a", "b"], &["speed", "cost"]))
            .await
            .unwrap();

        assert_eq!(routed.call_count(), 2);
        let skipped = result.comparison[0].scores.get("cost").unwrap();
        assert!(!skipped.is_available());
        assert!(skipped.explanation.contains("not supported by scorer 'routing'"));
    }
}
