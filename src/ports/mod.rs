//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Scoring Ports
//!
//! - `DomainScorer` - Produces a raw 0-10 score for one (option, criterion) pair

mod domain_scorer;

pub use domain_scorer::{DomainScorer, ScoreOutcome, ScorerError, ScorerInfo};
