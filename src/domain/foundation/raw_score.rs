//! Raw score value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An unweighted per-criterion quality value between 0 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScore(f64);

impl RawScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);

    /// Highest possible score.
    pub const MAX: Self = Self(10.0);

    /// Creates a new RawScore, clamping to the valid range.
    ///
    /// NaN collapses to zero and negative zero is stored as zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(Self::MIN.0, Self::MAX.0) + 0.0)
    }

    /// Creates a RawScore, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite("raw_score"));
        }
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "raw_score",
                Self::MIN.0,
                Self::MAX.0,
                value,
            ));
        }
        Ok(Self(value + 0.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RawScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_score_new_accepts_valid_values() {
        assert_eq!(RawScore::new(0.0).value(), 0.0);
        assert_eq!(RawScore::new(7.5).value(), 7.5);
        assert_eq!(RawScore::new(10.0).value(), 10.0);
    }

    #[test]
    fn raw_score_new_clamps_out_of_range() {
        assert_eq!(RawScore::new(-3.0).value(), 0.0);
        assert_eq!(RawScore::new(14.0).value(), 10.0);
        assert_eq!(RawScore::new(f64::INFINITY).value(), 10.0);
        assert_eq!(RawScore::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn raw_score_normalizes_negative_zero() {
        assert!(RawScore::new(-0.0).value().is_sign_positive());
        assert!(RawScore::try_new(-0.0).unwrap().value().is_sign_positive());

        let json = serde_json::to_string(&RawScore::new(-0.0)).unwrap();
        assert_eq!(json, "0.0");
    }

    #[test]
    fn raw_score_try_new_rejects_out_of_range() {
        assert!(RawScore::try_new(-0.1).is_err());
        assert!(RawScore::try_new(10.1).is_err());
        assert!(matches!(
            RawScore::try_new(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn raw_score_displays_on_ten_point_scale() {
        assert_eq!(format!("{}", RawScore::new(8.0)), "8.0/10");
    }

    #[test]
    fn raw_score_serializes_as_number() {
        let json = serde_json::to_string(&RawScore::new(6.5)).unwrap();
        assert_eq!(json, "6.5");
    }
}
