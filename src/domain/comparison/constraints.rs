//! Hard constraints applied before ranking.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::ValidationError;

/// Hard pass/fail filters plus optional weight overrides.
///
/// Every key is optional; an absent key means "no constraint". Unknown keys
/// in serialized input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_features: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl Constraints {
    /// No constraints at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the maximum acceptable cost.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Adds a required feature.
    pub fn with_required_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_features
            .get_or_insert_with(BTreeSet::new)
            .insert(feature.into());
        self
    }

    /// Overrides the weight of a criterion.
    pub fn with_weight(mut self, criterion: impl Into<String>, weight: f64) -> Self {
        self.weights
            .get_or_insert_with(BTreeMap::new)
            .insert(criterion.into(), weight);
        self
    }

    /// Checks that numeric constraints are usable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(max_cost) = self.max_cost {
            if !max_cost.is_finite() {
                return Err(ValidationError::not_finite("maxCost"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let constraints = Constraints::none()
            .with_max_cost(50.0)
            .with_required_feature("sso")
            .with_weight("cost", 0.7);

        assert_eq!(constraints.max_cost, Some(50.0));
        assert!(constraints.required_features.unwrap().contains("sso"));
        assert_eq!(constraints.weights.unwrap().get("cost"), Some(&0.7));
    }

    #[test]
    fn deserialization_ignores_unknown_keys() {
        let json = r#"{ "maxCost": 100, "region": "eu-west-1" }"#;
        let constraints: Constraints = serde_json::from_str(json).unwrap();

        assert_eq!(constraints.max_cost, Some(100.0));
        assert!(constraints.required_features.is_none());
    }

    #[test]
    fn validate_rejects_non_finite_max_cost() {
        let constraints = Constraints::none().with_max_cost(f64::INFINITY);
        assert!(constraints.validate().is_err());
        assert!(Constraints::none().with_max_cost(-1.0).validate().is_ok());
    }
}
