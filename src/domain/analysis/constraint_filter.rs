//! Constraint Filter - Hard pass/fail predicates over a single option.

use crate::domain::comparison::{ComparisonOption, Constraints};

/// Evaluates constraints as a conjunction of independent predicates.
pub struct ConstraintFilter;

impl ConstraintFilter {
    /// Returns true if the option satisfies every present constraint.
    ///
    /// # Edge Cases
    /// - Option without cost: passes `max_cost`
    /// - No required features: passes, even without a feature set
    /// - Absent constraint keys: no constraint
    pub fn meets_constraints(option: &ComparisonOption, constraints: &Constraints) -> bool {
        Self::within_budget(option, constraints) && Self::has_required_features(option, constraints)
    }

    /// Lists the reasons an option fails its constraints, in predicate order.
    pub fn violations(option: &ComparisonOption, constraints: &Constraints) -> Vec<String> {
        let mut violations = Vec::new();

        if !Self::within_budget(option, constraints) {
            if let (Some(cost), Some(max_cost)) = (option.cost, constraints.max_cost) {
                violations.push(format!("cost {} exceeds maximum {}", cost, max_cost));
            }
        }

        if let Some(required) = &constraints.required_features {
            let missing: Vec<&str> = required
                .iter()
                .filter(|feature| !option.has_feature(feature))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                violations.push(format!("missing required features: {}", missing.join(", ")));
            }
        }

        violations
    }

    fn within_budget(option: &ComparisonOption, constraints: &Constraints) -> bool {
        match (option.cost, constraints.max_cost) {
            (Some(cost), Some(max_cost)) => cost <= max_cost,
            _ => true,
        }
    }

    fn has_required_features(option: &ComparisonOption, constraints: &Constraints) -> bool {
        constraints
            .required_features
            .as_ref()
            .map(|required| required.iter().all(|feature| option.has_feature(feature)))
            .unwrap_or(true)
    }
}
