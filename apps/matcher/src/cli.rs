use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "career-matcher")]
#[command(about = "Personality survey → career recommendations with reasons", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional JSON config file (mode, top_k, report_dir)
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory holding questions.json and careers.json
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Append-only CSV log of past runs
    #[arg(long, default_value = "history.csv")]
    pub history: PathBuf,

    /// Scoring mode: "weighted" or "cosine" (anything else means cosine)
    #[arg(long, env = "MATCHER_MODE")]
    pub mode: Option<String>,

    /// Number of recommendations to show
    #[arg(long, env = "MATCHER_TOP_K", allow_negative_numbers = true)]
    pub top_k: Option<i64>,

    /// Where report.txt is written
    #[arg(long, env = "MATCHER_REPORT_DIR")]
    pub report_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode.clone(),
            top_k: self.top_k,
            report_dir: self.report_dir.clone(),
        }
    }
}
