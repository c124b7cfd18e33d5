use crate::matching::scores::ScoreMap;

/// Min-max rescales scores to [0, 1] for display.
///
/// Empty input returns empty output. When every score is equal, each one
/// reads as a best match (1.0). Ranking always uses the raw scores, never
/// this output.
pub fn minmax_normalize(scores: &ScoreMap) -> ScoreMap {
    if scores.is_empty() {
        return ScoreMap::new();
    }

    let (min, max) = scores
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if max == min {
        return scores.iter().map(|(name, _)| (name, 1.0)).collect();
    }

    let span = max - min;
    scores
        .iter()
        .map(|(name, v)| (name, (v - min) / span))
        .collect()
}
