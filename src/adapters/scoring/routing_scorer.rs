//! Routing Scorer - Dispatches each criterion to a dedicated scorer.
//!
//! Lets one comparison mix scorers, e.g. cloud profiles for `scalability`
//! and option attributes for `support`.
//!
//! # Example
//!
//! ```ignore
//! let scorer = RoutingScorer::new()
//!     .route("scalability", Arc::new(CloudCostScorer::new()))
//!     .with_fallback(Arc::new(AttributeScorer::new()));
//! ```

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::comparison::{ComparisonOption, Constraints};
use crate::ports::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};

/// Per-criterion dispatch with an optional fallback.
#[derive(Clone, Default)]
pub struct RoutingScorer {
    routes: BTreeMap<String, Arc<dyn DomainScorer>>,
    fallback: Option<Arc<dyn DomainScorer>>,
}

impl RoutingScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a criterion to a scorer, replacing any previous route.
    pub fn route(mut self, criterion: impl Into<String>, scorer: Arc<dyn DomainScorer>) -> Self {
        self.routes.insert(criterion.into(), scorer);
        self
    }

    /// Sets the scorer used for criteria without a route.
    pub fn with_fallback(mut self, scorer: Arc<dyn DomainScorer>) -> Self {
        self.fallback = Some(scorer);
        self
    }

    fn scorer_for(&self, criterion: &str) -> Option<&Arc<dyn DomainScorer>> {
        self.routes.get(criterion).or(self.fallback.as_ref())
    }
}

#[async_trait]
impl DomainScorer for RoutingScorer {
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError> {
        match self.scorer_for(criterion) {
            Some(scorer) => scorer.score(option, criterion, constraints).await,
            None => Err(ScorerError::unsupported("routing", criterion)),
        }
    }

    fn scorer_info(&self) -> ScorerInfo {
        let info = ScorerInfo::new("routing");
        if self.fallback.is_some() {
            info
        } else {
            info.with_criteria(self.routes.keys().cloned().collect::<Vec<String>>())
        }
    }
}
