use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::preferences::PreferenceKey;
use crate::models::traits::{Trait, TraitScores};

/// A static career entry: how much each trait matters for the role, plus
/// optional 0–1 emphasis on what the role offers.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerRecord {
    pub name: String,
    pub weights: TraitScores,
    pub preferences: BTreeMap<PreferenceKey, f64>,
}

impl CareerRecord {
    pub fn new(name: impl Into<String>, weights: TraitScores) -> Self {
        Self {
            name: name.into(),
            weights,
            preferences: BTreeMap::new(),
        }
    }

    pub fn with_preferences(mut self, preferences: BTreeMap<PreferenceKey, f64>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Name used as the score key: surrounding whitespace removed.
    pub fn key(&self) -> &str {
        self.name.trim()
    }

    /// The emphasised preference with the highest value. Ties go to the
    /// first key in canonical order.
    pub fn top_preference(&self) -> Option<PreferenceKey> {
        self.preferences
            .iter()
            .fold(None, |best: Option<(PreferenceKey, f64)>, (&k, &v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((k, v)),
            })
            .map(|(k, _)| k)
    }
}

/// One survey statement, rated 1–5 by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_code: Trait,
    pub reverse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_trims_whitespace() {
        let c = CareerRecord::new("  Data Scientist \t", TraitScores::new());
        assert_eq!(c.key(), "Data Scientist");
    }

    #[test]
    fn test_top_preference_none_when_empty() {
        let c = CareerRecord::new("X", TraitScores::new());
        assert_eq!(c.top_preference(), None);
    }

    #[test]
    fn test_top_preference_picks_highest() {
        let c = CareerRecord::new("X", TraitScores::new()).with_preferences(BTreeMap::from([
            (PreferenceKey::Salary, 0.4),
            (PreferenceKey::Creativity, 0.9),
            (PreferenceKey::Social, 0.2),
        ]));
        assert_eq!(c.top_preference(), Some(PreferenceKey::Creativity));
    }

    #[test]
    fn test_top_preference_tie_goes_to_first_key() {
        let c = CareerRecord::new("X", TraitScores::new()).with_preferences(BTreeMap::from([
            (PreferenceKey::Social, 0.8),
            (PreferenceKey::Stability, 0.8),
        ]));
        assert_eq!(c.top_preference(), Some(PreferenceKey::Stability));
    }

    #[test]
    fn test_question_deserializes_trait_code() {
        let q: Question = serde_json::from_str(
            r#"{"id": 7, "text": "I enjoy puzzles", "trait": "M", "reverse": false}"#,
        )
        .unwrap();
        assert_eq!(q.trait_code, Trait::AnalyticalMindset);
        assert!(!q.reverse);
    }
}
