//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that turn scored options into a
//! ranked recommendation, a trade-off report and summary statistics.
//!
//! # Components
//!
//! - `Aggregator` - Weighted-sum totals and the sum invariant check
//! - `ConstraintFilter` - Hard pass/fail predicates
//! - `Recommender` - Top valid option and confidence from the score gap
//! - `TradeoffAnalyzer` - Pairwise trade-offs between all options
//! - `SummaryReporter` - Top choices and per-criterion averages
//! - `ComparisonAnalysis` - Composes the above into a `ComparisonResult`
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Scoring, which may
//! involve I/O, happens before this layer through the `DomainScorer` port.

mod aggregator;
mod comparison_result;
mod constraint_filter;
mod recommender;
mod settings;
mod summary_reporter;
mod tradeoff_analyzer;

pub use aggregator::{Aggregator, InvariantViolation};
pub use comparison_result::{ComparisonAnalysis, ComparisonResult};
pub use constraint_filter::ConstraintFilter;
pub use recommender::{Recommendation, Recommender, NO_VALID_OPTIONS_REASON};
pub use settings::{
    AnalysisSettings, DEFAULT_ALTERNATIVES_LIMIT, DEFAULT_CONFIDENCE_SPREAD,
    DEFAULT_STRONG_SCORE_THRESHOLD, DEFAULT_TOP_CHOICES_LIMIT, DEFAULT_TRADEOFF_MARGIN,
};
pub use summary_reporter::{CriterionAverage, KeyInsight, Summary, SummaryReporter, TopChoice};
pub use tradeoff_analyzer::{PairComparison, Tradeoff, TradeoffAnalyzer};
