//! Text rendering of a finished run: terminal summary and the saved report.
//!
//! Both renderings list recommendations in exactly the order of the ranking
//! they are given; normalized scores are looked up for display only.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::AppError;
use crate::matching::{RankedCareer, ScoreMap, ScoringMode};
use crate::models::TraitScores;

const BAR_WIDTH: f64 = 20.0;
const NOTES: &str =
    "(Notes: higher score indicates better match; normalized scores are 0..1.)";

/// Everything a rendering needs from one run.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub traits: &'a TraitScores,
    pub normalized: &'a ScoreMap,
    pub ranking: &'a [RankedCareer],
    pub explanations: &'a HashMap<String, String>,
    pub mode: ScoringMode,
}

/// Summary printed to the terminal after the survey.
pub fn render_summary(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nScoring mode = {}", input.mode);
    out.push_str("\nYour trait scores (0–1 scaled):\n");
    push_trait_lines(&mut out, input.traits, false);
    out.push_str("\nTop Recommendations:\n");
    push_recommendations(&mut out, input);
    let _ = writeln!(out, "\n{NOTES}");
    out
}

/// Full report written to disk. Deterministic for a given input and
/// timestamp.
pub fn render_report(input: &ReportInput<'_>, generated_at: DateTime<Utc>) -> String {
    let rule = "=".repeat(72);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    out.push_str(" Personality → Career Matcher: Report\n");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Scoring mode: {}", input.mode);

    out.push_str("\nTrait scores (0–1 scaled):\n");
    push_trait_lines(&mut out, input.traits, true);

    out.push_str("\nTop recommendations:\n");
    if input.ranking.is_empty() {
        out.push_str("  (none)\n");
    }
    push_recommendations(&mut out, input);

    let _ = writeln!(out, "\n{NOTES}");
    out.push_str("Raw scores decide the ranking; normalized scores are for display only.\n");
    out
}

fn push_trait_lines(out: &mut String, traits: &TraitScores, with_labels: bool) {
    for (t, &v) in traits {
        let bar = "█".repeat(bar_len(v));
        if with_labels {
            let _ = writeln!(out, "  {t}: {v:0.2} {bar:<20}  {}", t.label());
        } else {
            let _ = writeln!(out, "  {t}: {v:0.2} {bar}");
        }
    }
}

fn push_recommendations(out: &mut String, input: &ReportInput<'_>) {
    for (i, ranked) in input.ranking.iter().enumerate() {
        let norm = input.normalized.get(&ranked.name).unwrap_or(0.0);
        let why = input
            .explanations
            .get(&ranked.name)
            .map(String::as_str)
            .unwrap_or("");
        let _ = writeln!(
            out,
            "  {}. {} — normalized score {norm:0.3}\n     Why: {why}",
            i + 1,
            ranked.name
        );
    }
}

fn bar_len(v: f64) -> usize {
    // v is in [0, 1], so the cast cannot overflow
    (v.clamp(0.0, 1.0) * BAR_WIDTH).floor() as usize
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn save_report(path: &Path, content: &str) -> Result<(), AppError> {
    let write_err = |source: std::io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trait;
    use chrono::TimeZone;
    use tempfile::TempDir;

    struct Fixture {
        traits: TraitScores,
        normalized: ScoreMap,
        ranking: Vec<RankedCareer>,
        explanations: HashMap<String, String>,
    }

    impl Fixture {
        fn new() -> Self {
            let traits: TraitScores = Trait::ALL
                .iter()
                .copied()
                .zip([1.0, 0.75, 0.5, 0.25, 0.0, 0.5])
                .collect();
            let ranking = vec![
                RankedCareer {
                    name: "Data Scientist".to_string(),
                    score: 1.2,
                },
                RankedCareer {
                    name: "Accountant".to_string(),
                    score: 0.9,
                },
            ];
            let normalized: ScoreMap = [("Accountant", 0.4), ("Data Scientist", 1.0), ("Nurse", 0.0)]
                .into_iter()
                .collect();
            let explanations = HashMap::from([
                ("Data Scientist".to_string(), "Why it fits: logic.".to_string()),
                ("Accountant".to_string(), "Why it fits: order.".to_string()),
            ]);
            Self {
                traits,
                normalized,
                ranking,
                explanations,
            }
        }

        fn input(&self) -> ReportInput<'_> {
            ReportInput {
                traits: &self.traits,
                normalized: &self.normalized,
                ranking: &self.ranking,
                explanations: &self.explanations,
                mode: ScoringMode::Weighted,
            }
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_len(0.0), 0);
        assert_eq!(bar_len(0.5), 10);
        assert_eq!(bar_len(0.99), 19);
        assert_eq!(bar_len(1.0), 20);
    }

    #[test]
    fn test_report_is_deterministic() {
        let f = Fixture::new();
        assert_eq!(
            render_report(&f.input(), fixed_time()),
            render_report(&f.input(), fixed_time())
        );
    }

    #[test]
    fn test_report_header_and_sections() {
        let f = Fixture::new();
        let report = render_report(&f.input(), fixed_time());
        assert!(report.contains("Generated: 2024-05-01 12:30:00 UTC"));
        assert!(report.contains("Scoring mode: weighted"));
        assert!(report.contains(&format!("  E: 1.00 {}", "█".repeat(20))));
        assert!(report.contains(Trait::Conscientiousness.label()));
        assert!(report.contains("(Notes:"));
    }

    #[test]
    fn test_report_follows_ranking_order_not_normalized_order() {
        let f = Fixture::new();
        let report = render_report(&f.input(), fixed_time());
        let first = report.find("1. Data Scientist — normalized score 1.000").unwrap();
        let second = report.find("2. Accountant — normalized score 0.400").unwrap();
        assert!(first < second);
        assert!(!report.contains("Nurse"));
        assert!(report.contains("Why: Why it fits: logic."));
    }

    #[test]
    fn test_empty_ranking_noted() {
        let mut f = Fixture::new();
        f.ranking.clear();
        let report = render_report(&f.input(), fixed_time());
        assert!(report.contains("(none)"));
    }

    #[test]
    fn test_summary_sections() {
        let f = Fixture::new();
        let summary = render_summary(&f.input());
        assert!(summary.contains("Scoring mode = weighted"));
        assert!(summary.contains("Your trait scores (0–1 scaled):"));
        assert!(summary.contains("  N: 0.00 \n"));
        assert!(summary.contains("Top Recommendations:"));
        assert!(summary.contains("  1. Data Scientist"));
    }

    #[test]
    fn test_save_report_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("reports").join("report.txt");
        save_report(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_save_report_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        save_report(&path, "first").unwrap();
        save_report(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
