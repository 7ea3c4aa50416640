//! Per-criterion scores and the ordered score card of an option.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::foundation::{RawScore, Weight};

/// Whether a criterion score came from the scorer or replaced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Scored,
    Unavailable,
}

/// A single criterion's score for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub raw: RawScore,
    /// `raw * weight` for the criterion's weight in the active set.
    pub weighted: f64,
    pub explanation: String,
    pub status: ScoreStatus,
}

impl CriterionScore {
    /// Creates a score from a scorer's raw value.
    pub fn scored(
        criterion: impl Into<String>,
        raw: RawScore,
        weight: Weight,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            criterion: criterion.into(),
            raw,
            weighted: weight.apply(raw.value()),
            explanation: explanation.into(),
            status: ScoreStatus::Scored,
        }
    }

    /// Creates the lowest-possible score standing in for a failed scorer call.
    pub fn unavailable(criterion: impl Into<String>, weight: Weight, reason: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
            raw: RawScore::MIN,
            weighted: weight.apply(RawScore::MIN.value()),
            explanation: format!("Score unavailable: {}", reason.into()),
            status: ScoreStatus::Unavailable,
        }
    }

    /// Returns true if the scorer produced this value.
    pub fn is_available(&self) -> bool {
        self.status == ScoreStatus::Scored
    }
}

/// Scores of one option keyed by criterion, preserving insertion order.
///
/// Serializes as a JSON object `{ criterion: CriterionScore }` in the order
/// the scores were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    scores: Vec<CriterionScore>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a score, replacing any existing score for the same criterion.
    pub fn insert(&mut self, score: CriterionScore) {
        match self.scores.iter_mut().find(|s| s.criterion == score.criterion) {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
    }

    /// Adds a score, builder style.
    pub fn with(mut self, score: CriterionScore) -> Self {
        self.insert(score);
        self
    }

    /// Looks up the score for a criterion.
    pub fn get(&self, criterion: &str) -> Option<&CriterionScore> {
        self.scores.iter().find(|s| s.criterion == criterion)
    }

    /// Raw value for a criterion; missing criteria read as zero.
    pub fn raw_of(&self, criterion: &str) -> f64 {
        self.get(criterion).map(|s| s.raw.value()).unwrap_or(0.0)
    }

    /// Weighted value for a criterion; missing criteria read as zero.
    pub fn weighted_of(&self, criterion: &str) -> f64 {
        self.get(criterion).map(|s| s.weighted).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of scores that replaced a failed scorer call.
    pub fn unavailable_count(&self) -> usize {
        self.scores.iter().filter(|s| !s.is_available()).count()
    }
}

impl FromIterator<CriterionScore> for ScoreCard {
    fn from_iter<I: IntoIterator<Item = CriterionScore>>(iter: I) -> Self {
        let mut card = ScoreCard::new();
        for score in iter {
            card.insert(score);
        }
        card
    }
}

impl Serialize for ScoreCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for score in &self.scores {
            map.serialize_entry(&score.criterion, score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half() -> Weight {
        Weight::try_new(0.5).unwrap()
    }

    #[test]
    fn scored_computes_weighted_value() {
        let score = CriterionScore::scored("performance", RawScore::new(8.0), half(), "fast");
        assert_eq!(score.weighted, 4.0);
        assert!(score.is_available());
    }

    #[test]
    fn unavailable_scores_zero_with_explanation() {
        let score = CriterionScore::unavailable("latency", half(), "probe timed out");
        assert_eq!(score.raw, RawScore::MIN);
        assert_eq!(score.weighted, 0.0);
        assert_eq!(score.status, ScoreStatus::Unavailable);
        assert_eq!(score.explanation, "Score unavailable: probe timed out");
    }

    #[test]
    fn insert_replaces_existing_criterion() {
        let mut card = ScoreCard::new();
        card.insert(CriterionScore::scored("cost", RawScore::new(3.0), half(), "first"));
        card.insert(CriterionScore::scored("cost", RawScore::new(6.0), half(), "second"));

        assert_eq!(card.len(), 1);
        assert_eq!(card.raw_of("cost"), 6.0);
    }

    #[test]
    fn missing_criterion_reads_as_zero() {
        let card = ScoreCard::new();
        assert_eq!(card.raw_of("cost"), 0.0);
        assert_eq!(card.weighted_of("cost"), 0.0);
    }

    #[test]
    fn score_card_serializes_as_ordered_map() {
        let card = ScoreCard::new()
            .with(CriterionScore::scored("performance", RawScore::new(8.0), half(), "p"))
            .with(CriterionScore::scored("cost", RawScore::new(5.0), half(), "c"));

        let json = serde_json::to_string(&card).unwrap();
        let performance_at = json.find("\"performance\":").unwrap();
        let cost_at = json.find("\"cost\":").unwrap();
        assert!(performance_at < cost_at);
        assert!(json.contains("\"weighted\":2.5"));
        assert!(json.contains("\"status\":\"scored\""));
    }
}
