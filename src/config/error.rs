//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Confidence spread must be a positive number")]
    InvalidConfidenceSpread,

    #[error("Strong score threshold must be between 0 and 10")]
    InvalidStrongScoreThreshold,

    #[error("Trade-off margin must be a non-negative number")]
    InvalidTradeoffMargin,

    #[error("Top choices limit must be at least 1")]
    InvalidTopChoicesLimit,

    #[error("Scorer timeout must be between 1ms and 600000ms")]
    InvalidScorerTimeout,

    #[error("Max concurrent scores must be between 1 and 1024")]
    InvalidConcurrency,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
