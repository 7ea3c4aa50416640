//! Application layer - Orchestration of one comparison.
//!
//! This layer coordinates the scoring port with the pure analysis services.

mod decision_engine;

pub use decision_engine::{
    DecisionEngine, EngineSettings, EvaluationError, DEFAULT_MAX_CONCURRENT_SCORES,
    DEFAULT_SCORER_TIMEOUT,
};
