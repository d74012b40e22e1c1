//! Blind maze solver.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌─────────────┐
//!   │   session    │───▶│   explorer   │───▶│    oracle    │───▶│   retries   │───▶ maze service
//!   │ acquire/     │    │  DFS, stack  │    │ bounds check │    │ transient?  │
//!   │ submit       │◀───│  frontier    │◀───│ legal/illegal│◀───│ re-invoke   │
//!   └──────────────┘    └──────────────┘    └──────────────┘    └─────────────┘
//!          │
//!          └──────────── submit path ─────────▶ retries ─────────────────────────▶ maze service
//! ```
//!
//! Runs acquire → solve → submit once and prints the outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use blind_maze_solver::config::loader::{default_config, load_config};
use blind_maze_solver::observability::logging;
use blind_maze_solver::{report, SolverError, SubmissionOutcome};

#[derive(Parser)]
#[command(name = "blind-maze-solver")]
#[command(about = "Solve a remote maze one move check at a time", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => load_config(path),
        None => default_config(),
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            logging::init(cli.log_level.as_deref().unwrap_or("info"));
            report::error(&SolverError::from(e));
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.log_level.as_deref().unwrap_or(&config.observability.log_level));

    tracing::info!(
        base_url = %config.api.base_url,
        max_retries = config.retries.max_retries,
        transient_status = config.retries.transient_status,
        "Configuration loaded"
    );

    match blind_maze_solver::run(&config).await {
        Ok(outcome) => {
            report::submission(outcome);
            match outcome {
                SubmissionOutcome::Accepted => ExitCode::SUCCESS,
                SubmissionOutcome::Rejected => ExitCode::FAILURE,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, status = ?e.status(), "Run ended");
            report::error(&e);
            ExitCode::FAILURE
        }
    }
}
