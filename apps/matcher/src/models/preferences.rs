use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user values in a job. Keys match the `preferences` object of a
/// career record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    Salary,
    Stability,
    Creativity,
    Social,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::Salary,
        PreferenceKey::Stability,
        PreferenceKey::Creativity,
        PreferenceKey::Social,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PreferenceKey::Salary => "salary",
            PreferenceKey::Stability => "stability",
            PreferenceKey::Creativity => "creativity",
            PreferenceKey::Social => "social",
        }
    }

    pub fn from_key(key: &str) -> Option<PreferenceKey> {
        PreferenceKey::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Display name used in explanations.
    pub fn label(self) -> &'static str {
        match self {
            PreferenceKey::Salary => "compensation",
            PreferenceKey::Stability => "stability",
            PreferenceKey::Creativity => "creativity",
            PreferenceKey::Social => "social interaction",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalized preference weights; values sum to 1.
pub type PreferenceWeights = BTreeMap<PreferenceKey, f64>;

/// The user's four 1–5 preference ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceProfile {
    pub salary: u8,
    pub stability: u8,
    pub creativity: u8,
    pub social: u8,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            salary: 3,
            stability: 3,
            creativity: 3,
            social: 3,
        }
    }
}

impl PreferenceProfile {
    pub fn new(salary: u8, stability: u8, creativity: u8, social: u8) -> Self {
        Self {
            salary,
            stability,
            creativity,
            social,
        }
    }

    pub fn rating(&self, key: PreferenceKey) -> u8 {
        match key {
            PreferenceKey::Salary => self.salary,
            PreferenceKey::Stability => self.stability,
            PreferenceKey::Creativity => self.creativity,
            PreferenceKey::Social => self.social,
        }
    }

    /// Proportional weights. Ratings below 1 are floored at 1, so the sum is
    /// never zero.
    pub fn to_weights(&self) -> PreferenceWeights {
        let floored: Vec<(PreferenceKey, f64)> = PreferenceKey::ALL
            .iter()
            .map(|&k| (k, f64::from(self.rating(k).max(1))))
            .collect();
        let total: f64 = floored.iter().map(|(_, v)| v).sum();
        floored.into_iter().map(|(k, v)| (k, v / total)).collect()
    }
}
