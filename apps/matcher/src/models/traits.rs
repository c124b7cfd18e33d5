//! The six personality traits and their static reference text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A personality dimension measured by the survey.
///
/// Declaration order is the canonical order (E, C, O, A, N, M); every
/// trait-keyed map in the crate iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    EmotionalStability,
    #[serde(rename = "M")]
    AnalyticalMindset,
}

/// Trait-keyed values: normalized user scores or a career's weights.
pub type TraitScores = BTreeMap<Trait, f64>;

impl Trait {
    pub const ALL: [Trait; 6] = [
        Trait::Extraversion,
        Trait::Conscientiousness,
        Trait::Openness,
        Trait::Agreeableness,
        Trait::EmotionalStability,
        Trait::AnalyticalMindset,
    ];

    /// Single-letter code used in data files and the history log.
    pub fn code(self) -> &'static str {
        match self {
            Trait::Extraversion => "E",
            Trait::Conscientiousness => "C",
            Trait::Openness => "O",
            Trait::Agreeableness => "A",
            Trait::EmotionalStability => "N",
            Trait::AnalyticalMindset => "M",
        }
    }

    pub fn from_code(code: &str) -> Option<Trait> {
        Trait::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Trait::Extraversion => "Extraversion (social expression)",
            Trait::Conscientiousness => "Conscientiousness (planning & execution)",
            Trait::Openness => "Openness (creativity & novelty)",
            Trait::Agreeableness => "Agreeableness (collaboration & empathy)",
            Trait::EmotionalStability => "Emotional stability (stress tolerance)",
            Trait::AnalyticalMindset => "Analytical mindset (logic & abstraction)",
        }
    }

    /// What a high value of this trait brings to a role.
    pub fn strength(self) -> &'static str {
        match self {
            Trait::Extraversion => "supports clear communication and influencing others",
            Trait::Conscientiousness => "helps break tasks down and deliver reliably",
            Trait::Openness => "brings creative solutions and fresh perspectives",
            Trait::Agreeableness => "builds trust and smooth teamwork",
            Trait::EmotionalStability => "stays calm and steady under pressure",
            Trait::AnalyticalMindset => "enables structured thinking and data/logic reasoning",
        }
    }

    pub fn improvement_tip(self) -> &'static str {
        match self {
            Trait::Extraversion => "prepare talking points and practice concise presentations",
            Trait::Conscientiousness => "use pomodoro + kanban/checklists and review weekly",
            Trait::Openness => "keep an idea backlog and schedule regular creative time",
            Trait::Agreeableness => "run more user interviews and practice empathy mapping",
            Trait::EmotionalStability => {
                "learn stress management (chunk work, exercise, breathing)"
            }
            Trait::AnalyticalMindset => {
                "do more data analysis/logic drills and write out reasoning"
            }
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
