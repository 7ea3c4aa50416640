//! Scoring adapters - Implementations of the DomainScorer port.
//!
//! - `AttributeScorer` - Rule-driven scores from option attributes
//! - `CloudCostScorer` - Static cloud provider profiles
//! - `ApiHealthScorer` - HTTP probe of an option's endpoint
//! - `RoutingScorer` - Per-criterion dispatch to other scorers
//! - `MockDomainScorer` - Configurable scorer for tests

mod api_health_scorer;
mod attribute_scorer;
mod cloud_cost_scorer;
mod mock_scorer;
mod routing_scorer;

pub use api_health_scorer::{
    ApiHealthConfig, ApiHealthScorer, API_CRITERIA, DOCUMENTATION_ATTRIBUTE, URL_ATTRIBUTE,
};
pub use attribute_scorer::{AttributeScorer, ScoringRule};
pub use cloud_cost_scorer::{
    provider_profile, CloudCostScorer, ProviderProfile, CLOUD_CRITERIA, PROVIDER_ATTRIBUTE,
};
pub use mock_scorer::MockDomainScorer;
pub use routing_scorer::RoutingScorer;
