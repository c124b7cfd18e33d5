use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::data::validation::{validate_careers, validate_questions};
use crate::errors::AppError;
use crate::models::{CareerRecord, Question};

pub const QUESTIONS_FILE: &str = "questions.json";
pub const CAREERS_FILE: &str = "careers.json";

/// Reads and parses a JSON file. A missing file surfaces as
/// `AppError::MissingFile` so the caller can report it distinctly.
pub fn load_json(path: &Path) -> Result<Value, AppError> {
    let contents = fs::read_to_string(path).map_err(|e| AppError::from_read(path, e))?;
    serde_json::from_str(&contents).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validated survey and career data for one run.
#[derive(Debug, Clone)]
pub struct SurveyData {
    pub questions: Vec<Question>,
    pub careers: Vec<CareerRecord>,
}

impl SurveyData {
    /// Loads `questions.json` and `careers.json` from `data_dir`, validating
    /// both before returning.
    pub fn load(data_dir: &Path) -> Result<Self, AppError> {
        let questions = load_json(&data_dir.join(QUESTIONS_FILE))?;
        let careers = load_json(&data_dir.join(CAREERS_FILE))?;

        let data = SurveyData {
            questions: validate_questions(&questions)?,
            careers: validate_careers(&careers)?,
        };

        info!(
            questions = data.questions.len(),
            careers = data.careers.len(),
            "Loaded survey data from {}",
            data_dir.display()
        );
        Ok(data)
    }
}
