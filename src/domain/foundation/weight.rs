//! Criterion weight value object (0-1 linear multiplier).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Priority weight applied to a criterion's raw score.
///
/// Weights are linear multipliers, not probabilities: a criterion set's
/// weights need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Zero weight (criterion is reported but does not affect totals).
    pub const ZERO: Self = Self(0.0);

    /// Full weight.
    pub const ONE: Self = Self(1.0);

    /// Creates a Weight, returning error if outside `[0, 1]` or non-finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("weight"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, value));
        }
        Ok(Self(value + 0.0))
    }

    /// Equal-priority weight for a set of `count` criteria.
    pub fn equal_share(count: usize) -> Self {
        if count == 0 {
            return Self::ONE;
        }
        Self(1.0 / count as f64)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Applies this weight to a raw value.
    pub fn apply(&self, raw: f64) -> f64 {
        raw * self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
