//! Interactive survey: preference ratings and Likert questions.
//!
//! Generic over the input and output streams so the prompt loop runs against
//! stdin/stdout in the binary and in-memory buffers in tests. Invalid answers
//! are re-prompted and never surface as errors. Closing the input (EOF)
//! becomes `AppError::Interrupted`.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::errors::AppError;
use crate::models::{PreferenceProfile, Question, Trait, TraitProfile, TraitScores};

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn intro(&mut self) -> Result<(), AppError> {
        let rule = "=".repeat(72);
        writeln!(self.output, "{rule}").map_err(AppError::Terminal)?;
        writeln!(self.output, " Personality → Career Matcher ").map_err(AppError::Terminal)?;
        writeln!(self.output, "{rule}").map_err(AppError::Terminal)?;
        writeln!(
            self.output,
            "Answer a short personality survey. We'll recommend careers with reasons.\n"
        )
        .map_err(AppError::Terminal)
    }

    /// Asks until the user enters an integer in `low..=high`.
    pub fn ask_likert(&mut self, prompt: &str, low: u8, high: u8) -> Result<u8, AppError> {
        loop {
            write!(self.output, "{prompt} ({low}-{high}): ").map_err(AppError::Terminal)?;
            self.output.flush().map_err(AppError::Terminal)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(AppError::Terminal)?;
            if read == 0 {
                return Err(AppError::Interrupted);
            }

            let complaint = match line.trim().parse::<i64>() {
                Ok(v) if (i64::from(low)..=i64::from(high)).contains(&v) => {
                    // in range, so the cast is lossless
                    return Ok(v as u8);
                }
                Ok(_) => writeln!(
                    self.output,
                    "Please enter an integer between {low} and {high}."
                ),
                Err(_) => writeln!(self.output, "Invalid input. Please enter an integer."),
            };
            complaint.map_err(AppError::Terminal)?;
        }
    }

    pub fn collect_preferences(&mut self) -> Result<PreferenceProfile, AppError> {
        writeln!(self.output, "Before we start, tell us what you value more.")
            .map_err(AppError::Terminal)?;
        let salary = self.ask_likert("I value high salary", LIKERT_MIN, LIKERT_MAX)?;
        let stability = self.ask_likert("I value job stability", LIKERT_MIN, LIKERT_MAX)?;
        let creativity = self.ask_likert("I value creativity", LIKERT_MIN, LIKERT_MAX)?;
        let social = self.ask_likert(
            "I enjoy frequent social interaction",
            LIKERT_MIN,
            LIKERT_MAX,
        )?;
        Ok(PreferenceProfile::new(salary, stability, creativity, social))
    }

    /// Asks every question in order and returns the finalized trait scores.
    pub fn take_survey(&mut self, questions: &[Question]) -> Result<TraitScores, AppError> {
        writeln!(
            self.output,
            "\nSurvey begins. Rate each statement 1 (Strongly Disagree) to 5 (Strongly Agree).\n"
        )
        .map_err(AppError::Terminal)?;

        let mut profile = TraitProfile::new();
        for q in questions {
            let answer = self.ask_likert(&q.text, LIKERT_MIN, LIKERT_MAX)?;
            profile.update_trait(q.trait_code, answer, q.reverse);
        }
        for t in Trait::ALL {
            if profile.answered(t) == 0 {
                warn!(trait_code = %t, "No questions cover this trait; using the midpoint");
            }
        }
        Ok(profile.finalize())
    }
}
