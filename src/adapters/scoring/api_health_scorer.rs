//! API Health Scorer - Probes an option's endpoint over HTTP.
//!
//! Each option carries its endpoint in the `url` attribute. `latency` and
//! `reliability` issue one GET per call; `documentation` is read from the
//! option's attributes without any I/O.
//!
//! # Buckets
//!
//! | Latency      | Raw |    | Status | Raw |
//! |--------------|-----|----|--------|-----|
//! | < 100ms      | 10  |    | 2xx    | 10  |
//! | < 250ms      | 8   |    | 3xx    | 8   |
//! | < 500ms      | 6   |    | 4xx    | 4   |
//! | < 1000ms     | 4   |    | 5xx    | 1   |
//! | otherwise    | 2   |    |        |     |

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::comparison::{ComparisonOption, Constraints};
use crate::domain::foundation::RawScore;
use crate::ports::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};

/// Attribute holding the endpoint to probe.
pub const URL_ATTRIBUTE: &str = "url";

/// Attribute holding a 0-10 documentation rating.
pub const DOCUMENTATION_ATTRIBUTE: &str = "documentation";

/// Criteria this scorer understands.
pub const API_CRITERIA: &[&str] = &["latency", "reliability", "documentation"];

/// Configuration for the API health scorer.
#[derive(Debug, Clone)]
pub struct ApiHealthConfig {
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiHealthConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
        }
    }
}

impl ApiHealthConfig {
    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Scorer for API endpoints.
pub struct ApiHealthScorer {
    config: ApiHealthConfig,
    client: Client,
}

/// Result of one endpoint probe.
#[derive(Debug, Clone, Copy)]
struct Probe {
    status: StatusCode,
    elapsed: Duration,
}

impl ApiHealthScorer {
    /// Creates a scorer with its own HTTP client.
    pub fn new(config: ApiHealthConfig) -> Result<Self, ScorerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScorerError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Maps a response time onto the raw scale.
    pub fn latency_score(elapsed: Duration) -> RawScore {
        let raw = match elapsed.as_millis() {
            0..=99 => 10.0,
            100..=249 => 8.0,
            250..=499 => 6.0,
            500..=999 => 4.0,
            _ => 2.0,
        };
        RawScore::new(raw)
    }

    /// Maps an HTTP status onto the raw scale.
    pub fn reliability_score(status: StatusCode) -> RawScore {
        let raw = if status.is_success() {
            10.0
        } else if status.is_redirection() {
            8.0
        } else if status.is_client_error() {
            4.0
        } else if status.is_server_error() {
            1.0
        } else {
            5.0
        };
        RawScore::new(raw)
    }

    async fn probe(&self, option: &ComparisonOption) -> Result<Probe, ScorerError> {
        let url = option
            .string_attribute(URL_ATTRIBUTE)
            .ok_or_else(|| ScorerError::missing_attribute(&option.id, URL_ATTRIBUTE))?;

        let started = Instant::now();
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScorerError::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else if e.is_connect() {
                ScorerError::network(format!("Connection failed: {}", e))
            } else {
                ScorerError::network(e.to_string())
            }
        })?;
        let probe = Probe {
            status: response.status(),
            elapsed: started.elapsed(),
        };

        debug!(
            option_id = %option.id,
            status = probe.status.as_u16(),
            elapsed_ms = probe.elapsed.as_millis() as u64,
            "Probed endpoint"
        );

        Ok(probe)
    }
}

#[async_trait]
impl DomainScorer for ApiHealthScorer {
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        _constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError> {
        match criterion {
            "latency" => {
                let probe = self.probe(option).await?;
                Ok(ScoreOutcome::new(
                    Self::latency_score(probe.elapsed),
                    format!("responded in {}ms", probe.elapsed.as_millis()),
                ))
            }
            "reliability" => {
                let probe = self.probe(option).await?;
                Ok(ScoreOutcome::new(
                    Self::reliability_score(probe.status),
                    format!("responded with status {}", probe.status.as_u16()),
                ))
            }
            DOCUMENTATION_ATTRIBUTE => {
                let rating = option
                    .numeric_attribute(DOCUMENTATION_ATTRIBUTE)
                    .ok_or_else(|| {
                        ScorerError::missing_attribute(&option.id, DOCUMENTATION_ATTRIBUTE)
                    })?;
                Ok(ScoreOutcome::new(
                    RawScore::new(rating),
                    format!("documentation rated {}", rating),
                ))
            }
            other => Err(ScorerError::unsupported("api-health", other)),
        }
    }

    fn scorer_info(&self) -> ScorerInfo {
        ScorerInfo::new("api-health").with_criteria(API_CRITERIA.to_vec())
    }
}
