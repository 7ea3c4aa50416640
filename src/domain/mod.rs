//! Domain layer containing the decision engine's business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and error types
//! - `comparison` - Options, criteria, scores, constraints and requests
//! - `analysis` - Pure ranking, trade-off and summary services

pub mod analysis;
pub mod comparison;
pub mod foundation;
