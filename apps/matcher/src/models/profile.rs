use std::collections::BTreeMap;

use crate::models::traits::{Trait, TraitScores};

/// Likert midpoint used for traits no question touched.
const UNANSWERED_AVERAGE: f64 = 3.0;

/// Accumulates Likert answers (1–5) per trait while the survey runs.
///
/// `finalize` consumes the builder, so a finished profile cannot be fed
/// more answers.
#[derive(Debug, Clone)]
pub struct TraitProfile {
    sums: BTreeMap<Trait, f64>,
    counts: BTreeMap<Trait, u32>,
}

impl Default for TraitProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitProfile {
    pub fn new() -> Self {
        Self {
            sums: Trait::ALL.iter().map(|&t| (t, 0.0)).collect(),
            counts: Trait::ALL.iter().map(|&t| (t, 0)).collect(),
        }
    }

    /// Records one answer. Reverse-keyed questions contribute `6 - answer`.
    pub fn update_trait(&mut self, t: Trait, answer: u8, reverse: bool) {
        let value = if reverse {
            6.0 - f64::from(answer)
        } else {
            f64::from(answer)
        };
        *self.sums.entry(t).or_insert(0.0) += value;
        *self.counts.entry(t).or_insert(0) += 1;
    }

    pub fn answered(&self, t: Trait) -> u32 {
        self.counts.get(&t).copied().unwrap_or(0)
    }

    /// Normalizes each trait's average to [0, 1] via `(avg - 1) / 4`.
    pub fn finalize(self) -> TraitScores {
        Trait::ALL
            .iter()
            .map(|&t| {
                let count = self.counts.get(&t).copied().unwrap_or(0);
                let avg = if count == 0 {
                    UNANSWERED_AVERAGE
                } else {
                    self.sums.get(&t).copied().unwrap_or(0.0) / f64::from(count)
                };
                (t, (avg - 1.0) / 4.0)
            })
            .collect()
    }
}
