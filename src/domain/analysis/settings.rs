//! Tunable thresholds shared by the analysis components.

/// Default spread constant `K`: a 5-point gap saturates confidence.
pub const DEFAULT_CONFIDENCE_SPREAD: f64 = 10.0;

/// Raw score at or above which a criterion counts as a strength.
pub const DEFAULT_STRONG_SCORE_THRESHOLD: f64 = 7.0;

/// Raw-score difference a criterion must exceed to differentiate two options.
pub const DEFAULT_TRADEOFF_MARGIN: f64 = 1.0;

/// Number of entries in the summary's top choices.
pub const DEFAULT_TOP_CHOICES_LIMIT: usize = 3;

/// Number of alternatives listed alongside a recommendation.
pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 2;

/// Thresholds used by the recommender, trade-off analyzer and reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub confidence_spread: f64,
    pub strong_score_threshold: f64,
    pub tradeoff_margin: f64,
    pub top_choices_limit: usize,
    pub alternatives_limit: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            confidence_spread: DEFAULT_CONFIDENCE_SPREAD,
            strong_score_threshold: DEFAULT_STRONG_SCORE_THRESHOLD,
            tradeoff_margin: DEFAULT_TRADEOFF_MARGIN,
            top_choices_limit: DEFAULT_TOP_CHOICES_LIMIT,
            alternatives_limit: DEFAULT_ALTERNATIVES_LIMIT,
        }
    }
}
