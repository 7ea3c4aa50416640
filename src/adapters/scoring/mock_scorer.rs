//! Mock Domain Scorer for testing.
//!
//! Provides a configurable implementation of the DomainScorer port so engine
//! tests can run without probing endpoints.
//!
//! # Features
//!
//! - Fixed raw scores per (option, criterion)
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call and concurrency tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let scorer = MockDomainScorer::new()
//!     .with_score("aws", "cost", 4.0)
//!     .with_failure("gcp", "cost", ScorerError::unavailable("quota"));
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::comparison::{ComparisonOption, Constraints};
use crate::domain::foundation::RawScore;
use crate::ports::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};

type PairKey = (String, String);

/// Releases an in-flight slot when the call finishes or is cancelled.
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Mock scorer for testing.
#[derive(Debug, Clone)]
pub struct MockDomainScorer {
    scores: HashMap<PairKey, f64>,
    failures: HashMap<PairKey, ScorerError>,
    delays: HashMap<PairKey, Duration>,
    /// Raw score for pairs without a configured score.
    default_raw: f64,
    /// Latency applied to every call without a pair-specific delay.
    delay: Duration,
    calls: Arc<Mutex<Vec<PairKey>>>,
    call_count: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl Default for MockDomainScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDomainScorer {
    /// Creates a mock that scores every pair 5.0.
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            failures: HashMap::new(),
            delays: HashMap::new(),
            default_raw: 5.0,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn key(option_id: impl Into<String>, criterion: impl Into<String>) -> PairKey {
        (option_id.into(), criterion.into())
    }

    /// Sets the raw score for one pair.
    pub fn with_score(
        mut self,
        option_id: impl Into<String>,
        criterion: impl Into<String>,
        raw: f64,
    ) -> Self {
        self.scores.insert(Self::key(option_id, criterion), raw);
        self
    }

    /// Makes one pair fail with the given error.
    pub fn with_failure(
        mut self,
        option_id: impl Into<String>,
        criterion: impl Into<String>,
        error: ScorerError,
    ) -> Self {
        self.failures.insert(Self::key(option_id, criterion), error);
        self
    }

    /// Delays one pair.
    pub fn with_delay_for(
        mut self,
        option_id: impl Into<String>,
        criterion: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.delays.insert(Self::key(option_id, criterion), delay);
        self
    }

    /// Sets simulated latency for every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the raw score for unconfigured pairs.
    pub fn with_default_score(mut self, raw: f64) -> Self {
        self.default_raw = raw;
        self
    }

    /// Returns the number of calls made to this scorer.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Returns all recorded (option id, criterion) calls in arrival order.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.lock_calls().clone()
    }

    /// Returns the highest number of calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<PairKey>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn delay_for(&self, key: &PairKey) -> Duration {
        self.delays.get(key).copied().unwrap_or(self.delay)
    }
}

#[async_trait]
impl DomainScorer for MockDomainScorer {
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        _constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError> {
        let key = Self::key(option.id.as_str(), criterion);
        self.lock_calls().push(key.clone());
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        let guard = InFlightGuard(Arc::clone(&self.in_flight));

        let delay = self.delay_for(&key);
        if !delay.is_zero() {
            sleep(delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        drop(guard);

        if let Some(error) = self.failures.get(&key) {
            return Err(error.clone());
        }

        let raw = self.scores.get(&key).copied().unwrap_or(self.default_raw);
        Ok(ScoreOutcome::new(
            RawScore::new(raw),
            format!("mock score for {} on {}", option.id, criterion),
        ))
    }

    fn scorer_info(&self) -> ScorerInfo {
        ScorerInfo::new("mock")
    }
}
