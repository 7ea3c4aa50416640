//! Criteria - named comparison dimensions with priority weights.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::InputError;
use crate::domain::foundation::{ValidationError, Weight};

/// A named dimension of comparison with its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: Weight,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, weight: Weight) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// The active criterion set for one evaluation, in caller order.
///
/// Order matters: it is the iteration order for tie-breaks in the summary
/// and for the criteria listed in generated explanations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Resolves criterion names and weight overrides into an active set.
    ///
    /// Criteria without an override get the equal share `1/|criteria|`.
    /// Overrides for names outside the set are ignored.
    pub fn resolve(
        names: &[String],
        overrides: Option<&BTreeMap<String, f64>>,
    ) -> Result<Self, InputError> {
        if names.is_empty() {
            return Err(InputError::EmptyCriteria);
        }

        let default_weight = Weight::equal_share(names.len());
        let mut seen = HashSet::new();
        let mut criteria = Vec::with_capacity(names.len());

        for name in names {
            if name.trim().is_empty() {
                return Err(InputError::InvalidCriterion(ValidationError::empty_field(
                    "criteria",
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(InputError::InvalidCriterion(ValidationError::duplicate(
                    "criteria",
                    name.clone(),
                )));
            }

            let weight = match overrides.and_then(|weights| weights.get(name)) {
                Some(&value) => {
                    Weight::try_new(value).map_err(|e| InputError::invalid_weight(name, e))?
                }
                None => default_weight,
            };

            criteria.push(Criterion::new(name.clone(), weight));
        }

        Ok(Self { criteria })
    }

    /// Iterates criteria in caller order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Iterates criterion names in caller order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|c| c.name.as_str())
    }

    /// Looks up a criterion by name.
    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    /// Returns the weight for a criterion, if it is in the active set.
    pub fn weight_of(&self, name: &str) -> Option<Weight> {
        self.get(name).map(|c| c.weight)
    }

    /// Returns true if the criterion is in the active set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
