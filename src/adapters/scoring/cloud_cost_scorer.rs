//! Cloud Cost Scorer - Static provider profiles for cloud hosting options.
//!
//! Options name their provider through the `provider` attribute (falling back
//! to the option id). Profiles are read-only data built once per process.
//!
//! # Criteria
//!
//! | Criterion     | Source                                              |
//! |---------------|-----------------------------------------------------|
//! | `cost`        | Budget-relative when both cost and `maxCost` exist, |
//! |               | otherwise the profile's price rating                |
//! | `performance` | Profile                                             |
//! | `scalability` | Profile                                             |
//! | `ease_of_use` | Profile                                             |
//! | `ecosystem`   | Profile                                             |

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::comparison::{ComparisonOption, Constraints, COST_ATTRIBUTE};
use crate::domain::foundation::RawScore;
use crate::ports::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};

/// Attribute naming the provider of an option.
pub const PROVIDER_ATTRIBUTE: &str = "provider";

/// Criteria this scorer understands.
pub const CLOUD_CRITERIA: &[&str] = &[
    COST_ATTRIBUTE,
    "performance",
    "scalability",
    "ease_of_use",
    "ecosystem",
];

/// Static ratings for one provider, each on the raw 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderProfile {
    pub cost: f64,
    pub performance: f64,
    pub scalability: f64,
    pub ease_of_use: f64,
    pub ecosystem: f64,
}

impl ProviderProfile {
    /// Returns the rating for a criterion, if the profile has one.
    pub fn rating(&self, criterion: &str) -> Option<f64> {
        match criterion {
            COST_ATTRIBUTE => Some(self.cost),
            "performance" => Some(self.performance),
            "scalability" => Some(self.scalability),
            "ease_of_use" => Some(self.ease_of_use),
            "ecosystem" => Some(self.ecosystem),
            _ => None,
        }
    }
}

static PROVIDER_PROFILES: Lazy<HashMap<&'static str, ProviderProfile>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "aws",
        ProviderProfile {
            cost: 5.0,
            performance: 9.0,
            scalability: 10.0,
            ease_of_use: 5.0,
            ecosystem: 10.0,
        },
    );
    map.insert(
        "gcp",
        ProviderProfile {
            cost: 6.0,
            performance: 9.0,
            scalability: 9.0,
            ease_of_use: 6.0,
            ecosystem: 8.0,
        },
    );
    map.insert(
        "azure",
        ProviderProfile {
            cost: 5.0,
            performance: 8.0,
            scalability: 9.0,
            ease_of_use: 6.0,
            ecosystem: 9.0,
        },
    );
    map.insert(
        "digitalocean",
        ProviderProfile {
            cost: 8.0,
            performance: 7.0,
            scalability: 6.0,
            ease_of_use: 9.0,
            ecosystem: 6.0,
        },
    );
    map.insert(
        "heroku",
        ProviderProfile {
            cost: 4.0,
            performance: 6.0,
            scalability: 6.0,
            ease_of_use: 10.0,
            ecosystem: 7.0,
        },
    );
    map
});

/// Looks up a provider profile by case-insensitive name.
pub fn provider_profile(name: &str) -> Option<&'static ProviderProfile> {
    PROVIDER_PROFILES.get(name.trim().to_lowercase().as_str())
}

/// Scorer for cloud hosting options.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudCostScorer;

impl CloudCostScorer {
    pub fn new() -> Self {
        Self
    }

    fn provider_of(option: &ComparisonOption) -> &str {
        option
            .string_attribute(PROVIDER_ATTRIBUTE)
            .unwrap_or(option.id.as_str())
    }

    /// Scores cost against the budget: spending nothing is 10, spending the
    /// whole budget (or more) is 0.
    fn budget_score(cost: f64, max_cost: f64) -> ScoreOutcome {
        let raw = RawScore::new(10.0 * (1.0 - cost / max_cost));
        ScoreOutcome::new(
            raw,
            format!("cost {} uses {:.0}% of budget {}", cost, cost / max_cost * 100.0, max_cost),
        )
    }
}

#[async_trait]
impl DomainScorer for CloudCostScorer {
    async fn score(
        &self,
        option: &ComparisonOption,
        criterion: &str,
        constraints: &Constraints,
    ) -> Result<ScoreOutcome, ScorerError> {
        if criterion == COST_ATTRIBUTE {
            if let (Some(cost), Some(max_cost)) = (option.cost, constraints.max_cost) {
                if max_cost > 0.0 {
                    return Ok(Self::budget_score(cost, max_cost));
                }
            }
        }

        let provider = Self::provider_of(option);
        let profile = provider_profile(provider).ok_or_else(|| {
            ScorerError::unavailable(format!("no profile for provider '{}'", provider))
        })?;
        let rating = profile
            .rating(criterion)
            .ok_or_else(|| ScorerError::unsupported("cloud-cost", criterion))?;

        Ok(ScoreOutcome::new(
            RawScore::new(rating),
            format!("{} profile rates {} at {}", provider, criterion, rating),
        ))
    }

    fn scorer_info(&self) -> ScorerInfo {
        ScorerInfo::new("cloud-cost").with_criteria(CLOUD_CRITERIA.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_rates_every_criterion_on_raw_scale() {
        for name in ["aws", "gcp", "azure", "digitalocean", "heroku"] {
            let profile = provider_profile(name).unwrap();
            for criterion in CLOUD_CRITERIA {
                let rating = profile.rating(criterion).unwrap();
                assert!((0.0..=10.0).contains(&rating), "{} {}", name, criterion);
            }
        }
    }

    #[test]
    fn provider_lookup_is_case_insensitive() {
        assert!(provider_profile("AWS").is_some());
        assert!(provider_profile("linode").is_none());
    }

    #[tokio::test]
    async fn profile_rating_uses_provider_attribute() {
        let option = ComparisonOption::new("primary").with_attribute(PROVIDER_ATTRIBUTE, "heroku");
        let outcome = CloudCostScorer::new()
            .score(&option, "ease_of_use", &Constraints::none())
            .await
            .unwrap();

        assert_eq!(outcome.raw.value(), 10.0);
    }

    #[tokio::test]
    async fn cost_is_budget_relative_when_budget_known() {
        let option = ComparisonOption::new("aws").with_cost(25.0);
        let constraints = Constraints::none().with_max_cost(100.0);
        let outcome = CloudCostScorer::new()
            .score(&option, "cost", &constraints)
            .await
            .unwrap();

        assert_eq!(outcome.raw.value(), 7.5);
    }

    #[tokio::test]
    async fn cost_over_budget_scores_zero() {
        let option = ComparisonOption::new("aws").with_cost(250.0);
        let constraints = Constraints::none().with_max_cost(100.0);
        let outcome = CloudCostScorer::new()
            .score(&option, "cost", &constraints)
            .await
            .unwrap();

        assert_eq!(outcome.raw, RawScore::MIN);
    }

    #[tokio::test]
    async fn unknown_provider_is_unavailable() {
        let option = ComparisonOption::new("linode");
        let err = CloudCostScorer::new()
            .score(&option, "performance", &Constraints::none())
            .await
            .unwrap_err();

        assert!(matches!(err, ScorerError::Unavailable(_)));
    }

    #[tokio::test]
    async fn unknown_criterion_is_unsupported() {
        let option = ComparisonOption::new("gcp");
        let err = CloudCostScorer::new()
            .score(&option, "latency", &Constraints::none())
            .await
            .unwrap_err();

        assert_eq!(err, ScorerError::unsupported("cloud-cost", "latency"));
    }
}
