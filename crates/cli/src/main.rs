//! envset - Command-line interface for KEY=VALUE and structured configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load configuration sources via the shared config library.
//! - Print settings, or run a command with them in its environment.
//!
//! Does NOT handle:
//! - Parsing or decoding sources (see `crates/config`).
//!
//! Invariants:
//! - `install_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - A `.env` that cannot be loaded is logged and skipped, not fatal.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let dotenv = envset_config::install_dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Commands that need the discovered .env report the read error themselves.
    let dotenv = dotenv.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Continuing without .env");
        None
    });

    if let Err(e) = run_command(cli, dotenv.as_ref()) {
        let code = e.exit_code();
        // A failing child has already reported its own problem.
        if !matches!(
            e.downcast_ref::<error::CliError>(),
            Some(error::CliError::ChildExit(_))
        ) {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(code);
    }
}
