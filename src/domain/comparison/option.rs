//! Comparison option - one candidate being ranked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::ValidationError;

/// Attribute key that resolves to [`ComparisonOption::cost`].
pub const COST_ATTRIBUTE: &str = "cost";

/// A candidate option as supplied by the caller.
///
/// The engine treats everything except `id`, `cost` and `features` as opaque
/// data for domain scorers. Options are never mutated during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOption {
    /// Identifier, unique within one comparison.
    pub id: String,
    /// Human-readable name, falls back to `id` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cost used by the `max_cost` constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Feature set used by the `required_features` constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<BTreeSet<String>>,
    /// Domain-specific attributes read by scorers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl ComparisonOption {
    /// Creates an option with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Adds a feature, creating the feature set if needed.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features
            .get_or_insert_with(BTreeSet::new)
            .insert(feature.into());
        self
    }

    /// Adds a domain attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the name if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Returns true if the option declares the given feature.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features
            .as_ref()
            .map(|features| features.contains(feature))
            .unwrap_or(false)
    }

    /// Looks up a raw attribute value.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Looks up a numeric attribute. `cost` falls back to the cost field.
    pub fn numeric_attribute(&self, key: &str) -> Option<f64> {
        match self.attributes.get(key).and_then(Value::as_f64) {
            Some(value) => Some(value),
            None if key == COST_ATTRIBUTE => self.cost,
            None => None,
        }
    }

    /// Looks up a string attribute.
    pub fn string_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Checks the identifying fields and cost.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if let Some(cost) = self.cost {
            if !cost.is_finite() {
                return Err(ValidationError::not_finite("cost"));
            }
        }
        Ok(())
    }
}
