//! Domain Scorer Port - Interface for per-criterion scoring of options.
//!
//! This port abstracts how a raw score is produced for one (option, criterion)
//! pair, so the engine can rank API endpoints, cloud providers or anything
//! else without knowing how each domain measures quality.
//!
//! # Design
//!
//! - Scorers return a raw score on the 0-10 scale plus an explanation
//! - The engine applies weights; scorers never see them
//! - Scorers own their timeout and failure policy; the engine additionally
//!   bounds every call and turns any error into an "unavailable" score
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedScorer;
//!
//! #[async_trait]
//! impl DomainScorer for FixedScorer {
//!     async fn score(
//!         &self,
//!         _option: &ComparisonOption,
//!         _criterion: &str,
//!         _constraints: &Constraints,
//!     ) -> Result<ScoreOutcome, ScorerError> {
//!         Ok(ScoreOutcome::new(RawScore::new(5.0), "average"))
//!     }
//!
//!     fn scorer_info(&self) -> ScorerInfo {
//!         ScorerInfo::new("fixed")
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::comparison::{ComparisonOption, Constraints};
use crate::domain::foundation::{ErrorCode, RawScore};

/// Port for domain-specific scoring.
///
/// Implementations must be free of side effects on shared state so calls for
/// different (option, criterion) pairs can run concurrently.
#[async_trait]
pub trait DomainScorer: Send + Sync {
    /// Scores one option on one criterion.
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError>;

    /// Describes the scorer for logging.
    fn scorer_info(&self) -> ScorerInfo;
}

/// Raw score and explanation produced by a scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub raw: RawScore,
    pub explanation: String,
}

impl ScoreOutcome {
    pub fn new(raw: RawScore, explanation: impl Into<String>) -> Self {
        Self {
            raw,
            explanation: explanation.into(),
        }
    }
}

/// Scorer metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerInfo {
    /// Scorer name (e.g., "attribute", "cloud-cost").
    pub name: String,
    /// Criteria the scorer understands; empty means "any".
    pub supported_criteria: Vec<String>,
}

impl ScorerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supported_criteria: Vec::new(),
        }
    }

    /// Sets the supported criteria.
    pub fn with_criteria(mut self, criteria: Vec<impl Into<String>>) -> Self {
        self.supported_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the scorer accepts the criterion.
    pub fn supports(&self, criterion: &str) -> bool {
        self.supported_criteria.is_empty()
            || self.supported_criteria.iter().any(|c| c == criterion)
    }
}

/// Errors a scorer can report for one (option, criterion) pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    #[error("Criterion '{criterion}' is not supported by scorer '{scorer}'")]
    UnsupportedCriterion { scorer: String, criterion: String },

    #[error("Option '{option_id}' is missing attribute '{attribute}'")]
    MissingAttribute { option_id: String, attribute: String },

    #[error("Scorer unavailable: {0}")]
    Unavailable(String),

    #[error("Scorer timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Network error: {0}")]
    Network(String),
}

impl ScorerError {
    /// Creates an unsupported criterion error.
    pub fn unsupported(scorer: impl Into<String>, criterion: impl Into<String>) -> Self {
        ScorerError::UnsupportedCriterion {
            scorer: scorer.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attribute(option_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        ScorerError::MissingAttribute {
            option_id: option_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        ScorerError::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ScorerError::Network(message.into())
    }

    /// Returns true if retrying later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ScorerError::Unavailable(_) | ScorerError::Timeout { .. } | ScorerError::Network(_)
        )
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScorerError::Timeout { .. } => ErrorCode::ScorerTimeout,
            _ => ErrorCode::ScorerUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorer_info_supports_any_criterion_when_unrestricted() {
        let info = ScorerInfo::new("any");
        assert!(info.supports("cost"));

        let info = ScorerInfo::new("cloud").with_criteria(vec!["cost", "scalability"]);
        assert!(info.supports("cost"));
        assert!(!info.supports("latency"));
    }

    #[test]
    fn transient_errors_are_classified() {
        assert!(ScorerError::unavailable("down").is_transient());
        assert!(ScorerError::Timeout { timeout_ms: 10 }.is_transient());
        assert!(ScorerError::network("reset").is_transient());
        assert!(!ScorerError::unsupported("cloud", "latency").is_transient());
        assert!(!ScorerError::missing_attribute("a", "url").is_transient());
    }

    #[test]
    fn error_codes_distinguish_timeouts() {
        assert_eq!(
            ScorerError::Timeout { timeout_ms: 5 }.code(),
            ErrorCode::ScorerTimeout
        );
        assert_eq!(
            ScorerError::unavailable("x").code(),
            ErrorCode::ScorerUnavailable
        );
    }

    #[test]
    fn errors_display_context() {
        assert_eq!(
            ScorerError::missing_attribute("aws", "provider").to_string(),
            "Option 'aws' is missing attribute 'provider'"
        );
        assert_eq!(
            ScorerError::Timeout { timeout_ms: 250 }.to_string(),
            "Scorer timed out after 250ms"
        );
    }
}
