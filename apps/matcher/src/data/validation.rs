//! Eager validation of the questions and careers data files.
//!
//! Runs once before any scoring. A bad record aborts the run with a message
//! naming it; nothing is silently skipped.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::models::{CareerRecord, PreferenceKey, Question, Trait, TraitScores};

pub fn validate_questions(value: &Value) -> Result<Vec<Question>, AppError> {
    let items = non_empty_array(value, "questions.json")?;
    items.iter().map(validate_question).collect()
}

fn validate_question(item: &Value) -> Result<Question, AppError> {
    let bad = || AppError::validation(format!("Bad question item: {item}"));
    let obj = item.as_object().ok_or_else(bad)?;

    let id = obj.get("id").and_then(Value::as_i64).ok_or_else(bad)?;
    let text = obj.get("text").and_then(Value::as_str).ok_or_else(bad)?;
    let reverse = obj.get("reverse").and_then(Value::as_bool).ok_or_else(bad)?;
    let code = obj.get("trait").and_then(Value::as_str).ok_or_else(bad)?;
    let trait_code = Trait::from_code(code).ok_or_else(|| {
        AppError::validation(format!("Unknown trait in question {id}: {code}"))
    })?;

    Ok(Question {
        id,
        text: text.to_string(),
        trait_code,
        reverse,
    })
}

/// Validates every career record. Names that collide after trimming are
/// accepted with a warning; scoring keeps the later record.
pub fn validate_careers(value: &Value) -> Result<Vec<CareerRecord>, AppError> {
    let items = non_empty_array(value, "careers.json")?;
    let careers = items
        .iter()
        .map(validate_career)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for career in &careers {
        if !seen.insert(career.key()) {
            warn!(
                career = career.key(),
                "duplicate career name; the later record overrides the earlier one"
            );
        }
    }

    Ok(careers)
}

fn validate_career(item: &Value) -> Result<CareerRecord, AppError> {
    let bad = || AppError::validation(format!("Bad career item (needs 'name' & 'weights'): {item}"));
    let obj = item.as_object().ok_or_else(bad)?;
    let name = obj.get("name").and_then(Value::as_str).ok_or_else(bad)?;
    let weights_obj = obj.get("weights").and_then(Value::as_object).ok_or_else(bad)?;

    let weights = parse_weights(name, weights_obj)?;
    let preferences = match obj.get("preferences") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(prefs)) => parse_preferences(name, prefs)?,
        Some(other) => {
            return Err(AppError::validation(format!(
                "Preferences for {name} must be an object, got: {other}"
            )))
        }
    };

    Ok(CareerRecord::new(name, weights).with_preferences(preferences))
}

fn parse_weights(name: &str, weights: &Map<String, Value>) -> Result<TraitScores, AppError> {
    weights
        .iter()
        .map(|(code, w)| -> Result<(Trait, f64), AppError> {
            let t = Trait::from_code(code).ok_or_else(|| {
                AppError::validation(format!("Unknown trait key in weights: {code} for {name}"))
            })?;
            let w = finite_number(w).ok_or_else(|| {
                AppError::validation(format!("Non-numeric weight for {code} in {name}: {w}"))
            })?;
            Ok((t, w))
        })
        .collect()
}

fn parse_preferences(
    name: &str,
    prefs: &Map<String, Value>,
) -> Result<BTreeMap<PreferenceKey, f64>, AppError> {
    prefs
        .iter()
        .map(|(key, v)| -> Result<(PreferenceKey, f64), AppError> {
            let k = PreferenceKey::from_key(key).ok_or_else(|| {
                AppError::validation(format!("Unknown preference key: {key} for {name}"))
            })?;
            let v = finite_number(v)
                .filter(|v| (0.0..=1.0).contains(v))
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "Preference {key} for {name} must be a number in [0, 1], got: {v}"
                    ))
                })?;
            Ok((k, v))
        })
        .collect()
}

fn non_empty_array<'v>(value: &'v Value, file: &str) -> Result<&'v Vec<Value>, AppError> {
    value
        .as_array()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| AppError::validation(format!("{file} must be a non-empty list")))
}

fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|f| f.is_finite())
}
