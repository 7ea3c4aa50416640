//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `scoring` - Domain scorers (attribute rules, cloud profiles, HTTP probes)

pub mod scoring;

pub use scoring::{
    ApiHealthConfig, ApiHealthScorer, AttributeScorer, CloudCostScorer, MockDomainScorer,
    RoutingScorer, ScoringRule,
};
