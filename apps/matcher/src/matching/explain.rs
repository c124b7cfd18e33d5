//! Human-readable "why this career" text for ranked results.

use crate::models::{CareerRecord, Trait, TraitScores};

/// How many positive contributions the strengths sentence names.
const MAX_STRENGTHS: usize = 2;

/// Builds the explanation for one career.
///
/// Per-trait contribution is `traits[t] * weight[t]`. The text is up to three
/// sentences joined by single spaces:
/// 1. strengths: the two largest positive contributions, or a generic line
/// 2. watch-out: the single lowest contribution (always present when the
///    career weights any trait, framed as growth if it is still positive)
/// 3. preference note: only when the career declares preference emphasis
pub fn explain_career(career: &CareerRecord, traits: &TraitScores) -> String {
    let contributions: Vec<(Trait, f64)> = career
        .weights
        .iter()
        .map(|(&t, &w)| (t, traits.get(&t).copied().unwrap_or(0.0) * w))
        .collect();

    let mut parts = vec![strengths_sentence(&contributions)];
    if let Some(sentence) = watch_out_sentence(&contributions) {
        parts.push(sentence);
    }
    if let Some(sentence) = preference_sentence(career) {
        parts.push(sentence);
    }
    parts.join(" ")
}

fn strengths_sentence(contributions: &[(Trait, f64)]) -> String {
    let mut descending = contributions.to_vec();
    descending.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let strengths: Vec<String> = descending
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .take(MAX_STRENGTHS)
        .map(|(t, _)| format!("{}: {}", t.label(), t.strength()))
        .collect();

    if strengths.is_empty() {
        "Why it fits: your overall profile aligns with this role's weighting.".to_string()
    } else {
        format!("Why it fits: {}.", strengths.join("; "))
    }
}

fn watch_out_sentence(contributions: &[(Trait, f64)]) -> Option<String> {
    let mut ascending = contributions.to_vec();
    ascending.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let &(t, value) = ascending.first()?;

    Some(if value <= 0.0 {
        format!(
            "Watch-out: {} is relatively weaker or conflicts with this role's weighting; {}.",
            t.label(),
            t.improvement_tip()
        )
    } else {
        format!(
            "Potential growth: {} still has room to improve; {}.",
            t.label(),
            t.improvement_tip()
        )
    })
}

fn preference_sentence(career: &CareerRecord) -> Option<String> {
    let top = career.top_preference()?;
    Some(format!(
        "In addition, this career values \"{}\", which aligns with your preferences; \
         a small tie-break boost was applied.",
        top.label()
    ))
}
