//! Scorer: pluggable affinity between a user's trait vector and a career's
//! trait weights.
//!
//! Two backends exist, `WeightedScorer` (dot product) and `CosineScorer`.
//! `ScoringMode` picks one when the `Recommender` is built; there is no
//! switching mid-run.

use std::fmt;

use crate::models::TraitScores;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to add a scoring backend without touching the recommender.
pub trait Scorer: Send + Sync {
    /// Affinity of `traits` against `weights`. Only the keys present in
    /// `weights` take part; a trait missing from `traits` counts as 0.
    fn score(&self, traits: &TraitScores, weights: &TraitScores) -> f64;
}

/// Which scorer backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    #[default]
    Weighted,
    Cosine,
}

impl ScoringMode {
    /// `"weighted"` (any case, surrounding whitespace ignored) selects the
    /// dot product; every other value selects cosine.
    pub fn parse_lossy(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("weighted") {
            ScoringMode::Weighted
        } else {
            ScoringMode::Cosine
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoringMode::Weighted => "weighted",
            ScoringMode::Cosine => "cosine",
        }
    }

    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            ScoringMode::Weighted => Box::new(WeightedScorer),
            ScoringMode::Cosine => Box::new(CosineScorer),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

/// Σ traits[t] · weights[t] over the weighted traits.
pub struct WeightedScorer;

impl Scorer for WeightedScorer {
    fn score(&self, traits: &TraitScores, weights: &TraitScores) -> f64 {
        dot(traits, weights)
    }
}

/// Cosine similarity with the trait vector restricted to the weighted
/// dimensions. A zero norm on either side scores 0.0.
pub struct CosineScorer;

impl Scorer for CosineScorer {
    fn score(&self, traits: &TraitScores, weights: &TraitScores) -> f64 {
        let norm_traits = weights
            .keys()
            .map(|t| traits.get(t).copied().unwrap_or(0.0).powi(2))
            .sum::<f64>()
            .sqrt();
        let norm_weights = weights.values().map(|w| w * w).sum::<f64>().sqrt();

        if norm_traits == 0.0 || norm_weights == 0.0 {
            return 0.0;
        }

        dot(traits, weights) / (norm_traits * norm_weights)
    }
}

fn dot(traits: &TraitScores, weights: &TraitScores) -> f64 {
    weights
        .iter()
        .map(|(t, w)| traits.get(t).copied().unwrap_or(0.0) * w)
        .sum()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
