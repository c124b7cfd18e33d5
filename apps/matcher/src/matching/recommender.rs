//! Recommender: scores every career against the user's traits, ranks them,
//! and explains the top picks.
//!
//! The career list is borrowed read-only for the recommender's lifetime.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::matching::explain::explain_career;
use crate::matching::scorer::{Scorer, ScoringMode};
use crate::matching::scores::{RankedCareer, ScoreMap};
use crate::models::{CareerRecord, PreferenceKey, PreferenceProfile, PreferenceWeights, TraitScores};

/// Caps how far preference alignment can move a score. The tie-break term
/// is at most 1, so preferences shift a score by no more than 0.05.
pub const TIE_BREAK_COEFFICIENT: f64 = 0.05;

pub struct Recommender<'a> {
    careers: &'a [CareerRecord],
    mode: ScoringMode,
    scorer: Box<dyn Scorer>,
    preference_weights: PreferenceWeights,
}

impl<'a> Recommender<'a> {
    /// `preferences` defaults to neutral (all 3s) when `None`.
    pub fn new(
        careers: &'a [CareerRecord],
        mode: ScoringMode,
        preferences: Option<PreferenceProfile>,
    ) -> Self {
        debug!(%mode, careers = careers.len(), "Recommender ready");
        Self {
            careers,
            mode,
            scorer: mode.scorer(),
            preference_weights: preferences.unwrap_or_default().to_weights(),
        }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Raw score per career: `base + 0.05 * tie_break`.
    ///
    /// Careers are keyed by trimmed name. When two records share a trimmed
    /// name the later one wins.
    pub fn score(&self, user_traits: &TraitScores) -> ScoreMap {
        let mut scores = ScoreMap::new();
        for career in self.careers {
            let base = self.scorer.score(user_traits, &career.weights);
            let tb = self.tie_break(career);
            let total = base + TIE_BREAK_COEFFICIENT * tb;
            debug!(career = career.key(), base, tie_break = tb, total, "scored career");
            scores.insert(career.key(), total);
        }
        scores
    }

    /// Σ preference_weight[k] · career emphasis[k] over all four keys.
    fn tie_break(&self, career: &CareerRecord) -> f64 {
        PreferenceKey::ALL
            .iter()
            .map(|k| {
                self.preference_weights.get(k).copied().unwrap_or(0.0)
                    * career.preferences.get(k).copied().unwrap_or(0.0)
            })
            .sum()
    }

    /// Highest `k` scores, descending. Equal scores keep map order.
    pub fn top_k(&self, scores: &ScoreMap, k: usize) -> Vec<RankedCareer> {
        let mut ranked: Vec<RankedCareer> = scores
            .iter()
            .map(|(name, score)| RankedCareer {
                name: name.to_string(),
                score,
            })
            .collect();

        // Vec::sort_by is stable
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(k);
        ranked
    }

    /// Explanation text per ranked career, keyed by name.
    pub fn explain(
        &self,
        ranking: &[RankedCareer],
        user_traits: &TraitScores,
    ) -> HashMap<String, String> {
        let mut explanations = HashMap::new();
        for ranked in ranking {
            match self.find_career(&ranked.name) {
                Some(career) => {
                    explanations.insert(ranked.name.clone(), explain_career(career, user_traits));
                }
                None => warn!(career = %ranked.name, "ranked career not found; skipping explanation"),
            }
        }
        explanations
    }

    /// The record that produced `name`'s score: the last one with that
    /// trimmed name.
    fn find_career(&self, name: &str) -> Option<&'a CareerRecord> {
        self.careers.iter().rev().find(|c| c.key() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::minmax_normalize;
    use crate::models::Trait;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn traits(values: [f64; 6]) -> TraitScores {
        Trait::ALL.iter().copied().zip(values).collect()
    }

    fn career(name: &str, weights: &[(Trait, f64)]) -> CareerRecord {
        CareerRecord::new(name, weights.iter().copied().collect())
    }

    #[test]
    fn test_single_career_weighted_scores_exactly_one() {
        let careers = vec![career("X", &[(Trait::Extraversion, 1.0)])];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let scores = rec.score(&traits([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("X"), Some(1.0));
    }

    #[test]
    fn test_duplicate_trimmed_names_last_wins() {
        let careers = vec![
            career("Dup", &[(Trait::Extraversion, 1.0)]),
            career(" Dup ", &[(Trait::Extraversion, 0.25)]),
        ];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let scores = rec.score(&traits([1.0; 6]));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("Dup"), Some(0.25));
    }

    #[test]
    fn test_explain_uses_same_record_as_score_for_duplicates() {
        let careers = vec![
            career("Dup", &[(Trait::Extraversion, 1.0)]),
            career(" Dup ", &[(Trait::AnalyticalMindset, 1.0)]),
        ];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let user = traits([0.5; 6]);
        let ranking = rec.top_k(&rec.score(&user), 3);
        let explanations = rec.explain(&ranking, &user);
        let text = &explanations["Dup"];
        assert!(text.contains(Trait::AnalyticalMindset.label()), "Got: {text}");
        assert!(!text.contains(Trait::Extraversion.label()));
    }

    #[test]
    fn test_tie_break_adds_small_preference_bonus() {
        let careers = vec![career("X", &[(Trait::Openness, 1.0)]).with_preferences(
            BTreeMap::from([(PreferenceKey::Creativity, 1.0)]),
        )];
        // creativity weight = 5 / (1 + 1 + 5 + 1) = 0.625
        let prefs = PreferenceProfile::new(1, 1, 5, 1);
        let rec = Recommender::new(&careers, ScoringMode::Weighted, Some(prefs));
        let score = rec.score(&traits([0.0, 0.0, 0.5, 0.0, 0.0, 0.0])).get("X").unwrap();
        assert!((score - (0.5 + 0.05 * 0.625)).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_preferences_cannot_overturn_clear_trait_gap() {
        let careers = vec![
            career("Fit", &[(Trait::AnalyticalMindset, 1.0)]),
            career("Perks", &[(Trait::Extraversion, 1.0)]).with_preferences(BTreeMap::from([
                (PreferenceKey::Salary, 1.0),
                (PreferenceKey::Stability, 1.0),
                (PreferenceKey::Creativity, 1.0),
                (PreferenceKey::Social, 1.0),
            ])),
        ];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let user = traits([0.2, 0.5, 0.5, 0.5, 0.5, 0.9]);
        let ranking = rec.top_k(&rec.score(&user), 2);
        assert_eq!(ranking[0].name, "Fit");
    }

    #[test]
    fn test_cosine_mode_selected() {
        let careers = vec![career("X", &[(Trait::Extraversion, 3.0)])];
        let rec = Recommender::new(&careers, ScoringMode::Cosine, None);
        assert_eq!(rec.mode(), ScoringMode::Cosine);
        let score = rec.score(&traits([0.4; 6])).get("X").unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_k_zero_is_empty() {
        let rec = Recommender::new(&[], ScoringMode::Weighted, None);
        let scores: ScoreMap = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert!(rec.top_k(&scores, 0).is_empty());
    }

    #[test]
    fn test_top_k_larger_than_len_returns_all_descending() {
        let rec = Recommender::new(&[], ScoringMode::Weighted, None);
        let scores: ScoreMap = [("a", 0.1), ("b", 0.9), ("c", 0.5)].into_iter().collect();
        let ranking = rec.top_k(&scores, 100);
        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn test_top_k_ties_keep_insertion_order() {
        let rec = Recommender::new(&[], ScoringMode::Weighted, None);
        let scores: ScoreMap = [("first", 0.5), ("top", 0.8), ("second", 0.5)]
            .into_iter()
            .collect();
        let ranking = rec.top_k(&scores, 3);
        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["top", "first", "second"]);
    }

    #[test]
    fn test_explain_covers_every_ranked_career() {
        let careers = vec![
            career("A", &[(Trait::Openness, 0.8)]),
            career("B", &[(Trait::Conscientiousness, 0.6)]),
            career("C", &[(Trait::Agreeableness, 0.4)]),
        ];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let user = traits([0.5; 6]);
        let ranking = rec.top_k(&rec.score(&user), 2);
        let explanations = rec.explain(&ranking, &user);
        assert_eq!(explanations.len(), 2);
        assert!(explanations.contains_key("A"));
        assert!(explanations.contains_key("B"));
    }

    #[test]
    fn test_explain_skips_unknown_name() {
        let careers = vec![career("A", &[(Trait::Openness, 0.8)])];
        let rec = Recommender::new(&careers, ScoringMode::Weighted, None);
        let ranking = vec![RankedCareer {
            name: "Ghost".to_string(),
            score: 1.0,
        }];
        assert!(rec.explain(&ranking, &traits([0.5; 6])).is_empty());
    }

    proptest! {
        /// Property: ranking is unchanged by a monotonic rescale of the scores,
        /// including the min-max normalization used for display.
        #[test]
        fn ranking_invariant_under_monotonic_rescale(
            values in prop::collection::vec(-1000i32..1000, 1..15),
            scale in 1i32..10,
            shift in -50i32..50,
        ) {
            let rec = Recommender::new(&[], ScoringMode::Weighted, None);
            // Integer-valued scores keep the rescale exact.
            let raw: ScoreMap = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("c{i}"), f64::from(*v)))
                .collect();
            let rescaled: ScoreMap = raw
                .iter()
                .map(|(n, v)| (n, v * f64::from(scale) + f64::from(shift)))
                .collect();

            let names = |r: Vec<RankedCareer>| r.into_iter().map(|c| c.name).collect::<Vec<_>>();
            let k = raw.len();
            let by_raw = names(rec.top_k(&raw, k));
            prop_assert_eq!(&by_raw, &names(rec.top_k(&rescaled, k)));
            prop_assert_eq!(&by_raw, &names(rec.top_k(&minmax_normalize(&raw), k)));
        }
    }
}
