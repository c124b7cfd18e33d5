use std::collections::HashMap;

use tracing::info;

use crate::matching::normalize::minmax_normalize;
use crate::matching::recommender::Recommender;
use crate::matching::scorer::ScoringMode;
use crate::matching::scores::{RankedCareer, ScoreMap};
use crate::models::{CareerRecord, PreferenceProfile, TraitScores};

/// Result of one matching run.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub raw: ScoreMap,
    pub normalized: ScoreMap,
    pub ranking: Vec<RankedCareer>,
    pub explanations: HashMap<String, String>,
}

/// Scores, ranks and explains in one pass. The ranking comes from the raw
/// scores; `normalized` exists only for display.
pub fn run_matching(
    careers: &[CareerRecord],
    mode: ScoringMode,
    preferences: PreferenceProfile,
    traits: &TraitScores,
    top_k: usize,
) -> MatchOutcome {
    let recommender = Recommender::new(careers, mode, Some(preferences));
    let raw = recommender.score(traits);
    let normalized = minmax_normalize(&raw);
    let ranking = recommender.top_k(&raw, top_k);
    let explanations = recommender.explain(&ranking, traits);

    info!(
        mode = %recommender.mode(),
        scored = raw.len(),
        top = ?ranking.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        "Matching complete"
    );

    MatchOutcome {
        raw,
        normalized,
        ranking,
        explanations,
    }
}
