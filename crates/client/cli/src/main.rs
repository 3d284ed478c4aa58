//! Sideline scorekeeping CLI.
//!
//! Replays a RON game script through a [`GameSession`], printing the play
//! log followed by the halftime and full-game summaries.
mod config;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sideline_content::{CatalogLoader, RulesLoader, ScriptLoader};
use sideline_core::{PenaltyTable, RulesConfig};
use sideline_runtime::GameSession;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::CliConfig;

/// Replay a recorded football game and print the scoresheet
#[derive(Parser)]
#[command(name = "sideline")]
#[command(about = "Play-by-play scorekeeping for high school football", long_about = None)]
#[command(version)]
struct Cli {
    /// Game script to replay (RON)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Penalty catalog replacing the built-in NFHS table (RON)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Rules overrides (TOML)
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the session export as JSON instead of the scoresheet
    #[arg(long)]
    json: bool,

    /// Stop at the first rejected play instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    run(&cli, &config)
}

fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let script = ScriptLoader::load(&cli.script)
        .with_context(|| format!("Failed to load game script: {}", cli.script.display()))?;

    let catalog = match &cli.catalog {
        Some(path) => CatalogLoader::load(path)
            .with_context(|| format!("Failed to load penalty catalog: {}", path.display()))?,
        None => PenaltyTable::nfhs().clone(),
    };
    let rules = match &cli.rules {
        Some(path) => RulesLoader::load(path)
            .with_context(|| format!("Failed to load rules: {}", path.display()))?,
        None => RulesConfig::default(),
    };
    tracing::info!(
        script = %cli.script.display(),
        plays = script.plays.len(),
        penalties = catalog.len(),
        "replaying game script"
    );

    let mut session = GameSession::new(script.opening, rules, Arc::new(catalog))
        .with_team_names(config.teams.clone());

    let mut rejected = 0usize;
    for (index, play) in script.plays.into_iter().enumerate() {
        match session.record(play) {
            Ok(entry) => {
                if !cli.json {
                    report::print_entry(entry);
                }
            }
            Err(error) if cli.strict || !error.is_recoverable() => {
                return Err(error).with_context(|| format!("Play {} was rejected", index + 1));
            }
            Err(error) => {
                rejected += 1;
                report::print_rejected(index, &format!("{:#}", anyhow::Error::from(error)));
            }
        }
    }

    if cli.json {
        println!("{}", session.export().to_json()?);
    } else {
        report::print_reports(&session);
    }

    if rejected > 0 {
        tracing::warn!(rejected, "some plays were skipped");
    }
    Ok(())
}

/// Logs go to a file only; stdout is reserved for the scoresheet.
fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "sideline.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid SIDELINE_LOG filter: {}", config.log_filter))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).init();

    tracing::info!("Log file: {}/sideline.log", log_dir.display());
    Ok(guard)
}
