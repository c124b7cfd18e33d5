use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::errors::AppError;
use crate::matching::RankedCareer;
use crate::models::{Trait, TraitScores};

/// Career-name columns per row; shorter rankings are padded with empties.
const HISTORY_CAREER_COLUMNS: usize = 3;

pub fn history_header() -> String {
    let mut cols: Vec<String> = Trait::ALL.iter().map(|t| t.code().to_string()).collect();
    cols.extend((1..=HISTORY_CAREER_COLUMNS).map(|i| format!("top{i}")));
    cols.join(",")
}

/// One CSV row: six trait values to three decimals, then up to three names.
pub fn history_row(traits: &TraitScores, ranking: &[RankedCareer]) -> String {
    let mut fields: Vec<String> = Trait::ALL
        .iter()
        .map(|t| format!("{:0.3}", traits.get(t).copied().unwrap_or(0.0)))
        .collect();
    fields.extend(
        ranking
            .iter()
            .take(HISTORY_CAREER_COLUMNS)
            .map(|r| csv_field(&r.name)),
    );
    fields.resize(Trait::ALL.len() + HISTORY_CAREER_COLUMNS, String::new());
    fields.join(",")
}

/// Appends a row to the history log, writing the header first when the file
/// is new or empty.
pub fn append_history(
    path: &Path,
    traits: &TraitScores,
    ranking: &[RankedCareer],
) -> Result<(), AppError> {
    let write_err = |source: std::io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    let is_empty = file.metadata().map_err(write_err)?.len() == 0;

    let mut chunk = String::new();
    if is_empty {
        chunk.push_str(&history_header());
        chunk.push('\n');
    }
    chunk.push_str(&history_row(traits, ranking));
    chunk.push('\n');

    file.write_all(chunk.as_bytes()).map_err(write_err)
}

/// Quotes a field containing a comma, quote or line break (RFC 4180).
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
