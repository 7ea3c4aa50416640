//! Engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::{EngineSettings, DEFAULT_MAX_CONCURRENT_SCORES, DEFAULT_SCORER_TIMEOUT};
use crate::domain::analysis::{
    AnalysisSettings, DEFAULT_ALTERNATIVES_LIMIT, DEFAULT_CONFIDENCE_SPREAD,
    DEFAULT_STRONG_SCORE_THRESHOLD, DEFAULT_TOP_CHOICES_LIMIT, DEFAULT_TRADEOFF_MARGIN,
};

const MAX_SCORER_TIMEOUT_MS: u64 = 600_000;
const MAX_CONCURRENT_SCORES_LIMIT: usize = 1024;

/// Ranking thresholds and scorer fan-out limits
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Score gap at which confidence reaches 1.0 (from the 0.5 floor)
    #[serde(default = "default_confidence_spread")]
    pub confidence_spread: f64,

    /// Raw score at or above which a criterion counts as a strength
    #[serde(default = "default_strong_score_threshold")]
    pub strong_score_threshold: f64,

    /// Raw score difference a trade-off strength must exceed
    #[serde(default = "default_tradeoff_margin")]
    pub tradeoff_margin: f64,

    #[serde(default = "default_top_choices_limit")]
    pub top_choices_limit: usize,

    /// Alternatives listed next to the chosen option
    #[serde(default = "default_fallback_alternatives")]
    pub fallback_alternatives: usize,

    /// Bound on one scorer call in milliseconds
    #[serde(default = "default_scorer_timeout_ms")]
    pub scorer_timeout_ms: u64,

    /// Scorer calls in flight per evaluation
    #[serde(default = "default_max_concurrent_scores")]
    pub max_concurrent_scores: usize,
}

impl EngineConfig {
    /// Scorer call timeout as a Duration
    pub fn scorer_timeout(&self) -> Duration {
        Duration::from_millis(self.scorer_timeout_ms)
    }

    /// Thresholds for the analysis layer
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            confidence_spread: self.confidence_spread,
            strong_score_threshold: self.strong_score_threshold,
            tradeoff_margin: self.tradeoff_margin,
            top_choices_limit: self.top_choices_limit,
            alternatives_limit: self.fallback_alternatives,
        }
    }

    /// Full settings for the decision engine
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            scorer_timeout: self.scorer_timeout(),
            max_concurrent_scores: self.max_concurrent_scores,
            analysis: self.analysis_settings(),
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.confidence_spread.is_finite() || self.confidence_spread <= 0.0 {
            return Err(ValidationError::InvalidConfidenceSpread);
        }
        if !(0.0..=10.0).contains(&self.strong_score_threshold) {
            return Err(ValidationError::InvalidStrongScoreThreshold);
        }
        if !self.tradeoff_margin.is_finite() || self.tradeoff_margin < 0.0 {
            return Err(ValidationError::InvalidTradeoffMargin);
        }
        if self.top_choices_limit == 0 {
            return Err(ValidationError::InvalidTopChoicesLimit);
        }
        if self.scorer_timeout_ms == 0 || self.scorer_timeout_ms > MAX_SCORER_TIMEOUT_MS {
            return Err(ValidationError::InvalidScorerTimeout);
        }
        if self.max_concurrent_scores == 0
            || self.max_concurrent_scores > MAX_CONCURRENT_SCORES_LIMIT
        {
            return Err(ValidationError::InvalidConcurrency);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_spread: default_confidence_spread(),
            strong_score_threshold: default_strong_score_threshold(),
            tradeoff_margin: default_tradeoff_margin(),
            top_choices_limit: default_top_choices_limit(),
            fallback_alternatives: default_fallback_alternatives(),
            scorer_timeout_ms: default_scorer_timeout_ms(),
            max_concurrent_scores: default_max_concurrent_scores(),
        }
    }
}

fn default_confidence_spread() -> f64 {
    DEFAULT_CONFIDENCE_SPREAD
}

fn default_strong_score_threshold() -> f64 {
    DEFAULT_STRONG_SCORE_THRESHOLD
}

fn default_tradeoff_margin() -> f64 {
    DEFAULT_TRADEOFF_MARGIN
}

fn default_top_choices_limit() -> usize {
    DEFAULT_TOP_CHOICES_LIMIT
}

fn default_fallback_alternatives() -> usize {
    DEFAULT_ALTERNATIVES_LIMIT
}

fn default_scorer_timeout_ms() -> u64 {
    DEFAULT_SCORER_TIMEOUT.as_millis() as u64
}

fn default_max_concurrent_scores() -> usize {
    DEFAULT_MAX_CONCURRENT_SCORES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.confidence_spread, 10.0);
        assert_eq!(config.strong_score_threshold, 7.0);
        assert_eq!(config.tradeoff_margin, 1.0);
        assert_eq!(config.top_choices_limit, 3);
        assert_eq!(config.fallback_alternatives, 2);
        assert_eq!(config.scorer_timeout_ms, 5000);
        assert_eq!(config.max_concurrent_scores, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_domain_settings() {
        let config = EngineConfig::default();
        assert_eq!(config.analysis_settings(), AnalysisSettings::default());
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_validation_zero_spread() {
        let config = EngineConfig {
            confidence_spread: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConfidenceSpread)
        ));
    }

    #[test]
    fn test_validation_threshold_out_of_range() {
        let config = EngineConfig {
            strong_score_threshold: 11.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStrongScoreThreshold)
        ));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = EngineConfig {
            scorer_timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidScorerTimeout)
        ));
    }

    #[test]
    fn test_validation_zero_concurrency() {
        let config = EngineConfig {
            max_concurrent_scores: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConcurrency)
        ));
    }

    #[test]
    fn test_engine_settings_conversion() {
        let config = EngineConfig {
            scorer_timeout_ms: 250,
            max_concurrent_scores: 4,
            fallback_alternatives: 5,
            ..Default::default()
        };
        let settings = config.engine_settings();
        assert_eq!(settings.scorer_timeout, Duration::from_millis(250));
        assert_eq!(settings.max_concurrent_scores, 4);
        assert_eq!(settings.analysis.alternatives_limit, 5);
    }
}
