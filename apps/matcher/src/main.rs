mod cli;
mod config;
mod data;
mod errors;
mod matching;
mod models;
mod output;
mod survey;

use std::io;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::data::SurveyData;
use crate::errors::AppError;
use crate::matching::run_matching;
use crate::output::{append_history, render_report, render_summary, save_report, ReportInput};
use crate::survey::Prompter;

fn main() -> ExitCode {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the survey prompts
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting career matcher v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Interrupted) => {
            println!("\n[INFO] Exited by user.");
            ExitCode::SUCCESS
        }
        Err(AppError::MissingFile { path }) => {
            eprintln!(
                "[ERROR] Missing file: {}. Did you place data/ JSON files correctly?",
                path.display()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.intro()?;

    let config = Config::load(&cli.config, &cli.overrides());
    info!(?config, "Configuration resolved");

    let data = SurveyData::load(&cli.data_dir)?;

    let preferences = prompter.collect_preferences()?;
    info!(?preferences, "Preferences collected");

    let traits = prompter.take_survey(&data.questions)?;
    debug!(?traits, "Survey finalized");

    let outcome = run_matching(&data.careers, config.mode, preferences, &traits, config.top_k);
    debug!(raw = ?outcome.raw, "Raw scores");
    let input = ReportInput {
        traits: &traits,
        normalized: &outcome.normalized,
        ranking: &outcome.ranking,
        explanations: &outcome.explanations,
        mode: config.mode,
    };

    println!("{}", render_summary(&input));

    let report_path = config.report_path();
    save_report(&report_path, &render_report(&input, Utc::now()))?;
    info!("Report written to {}", report_path.display());
    println!("Report saved to: {}", report_path.display());

    append_history(&cli.history, &traits, &outcome.ranking)?;
    info!("History appended to {}", cli.history.display());

    Ok(())
}
