//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! decision engine.

mod errors;
mod raw_score;
mod weight;

pub use errors::{ErrorCode, ValidationError};
pub use raw_score::RawScore;
pub use weight::Weight;
