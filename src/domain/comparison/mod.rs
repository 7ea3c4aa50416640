//! Comparison Module - Inputs and derived records of one evaluation.
//!
//! # Components
//!
//! - `ComparisonOption` - A caller-supplied candidate
//! - `CriteriaSet` - Active criteria with resolved weights
//! - `CriterionScore` / `ScoreCard` - Per-criterion scores of an option
//! - `Constraints` - Hard filters and weight overrides
//! - `EvaluationRequest` - Validated entry point for a comparison
//! - `EvaluatedOption` - Option + scores + total + constraint verdict

mod constraints;
mod criteria;
mod errors;
mod evaluated;
mod option;
mod request;
mod score;

pub use constraints::Constraints;
pub use criteria::{CriteriaSet, Criterion};
pub use errors::{InputError, MIN_OPTIONS};
pub use evaluated::EvaluatedOption;
pub use option::{ComparisonOption, COST_ATTRIBUTE};
pub use request::EvaluationRequest;
pub use score::{CriterionScore, ScoreCard, ScoreStatus};
