//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the line-oriented source for commands that read one.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - `show` reads only the document it names and never resolves a source.

use anyhow::Result;
use envset_config::DotenvInstall;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::SourceContext;

/// Dispatch CLI commands to their respective handlers.
///
/// `dotenv` describes the `.env` installed at startup, if any.
pub(crate) fn run_command(cli: Cli, dotenv: Option<&DotenvInstall>) -> Result<()> {
    match &cli.command {
        Commands::Get { key, default } => {
            let source = SourceContext::from_cli(&cli)?;
            commands::get::run(&source, key, default.as_deref())
        }
        Commands::List { format, reveal } => {
            let source = SourceContext::from_cli(&cli)?;
            commands::list::run(&source, *format, *reveal)
        }
        Commands::Check => commands::check::run(SourceContext::from_cli(&cli)?),
        Commands::Show {
            document,
            path,
            flatten,
            separator,
            format,
        } => commands::show::run(
            document,
            &commands::show::ShowOptions {
                path: path.as_deref(),
                flatten: *flatten,
                separator,
                format: *format,
            },
        ),
        Commands::Resolve { key, format } => {
            let source = SourceContext::from_cli(&cli)?;
            commands::resolve::run(&source, key, *format)
        }
        Commands::Run {
            no_override,
            command,
        } => {
            let source = SourceContext::from_cli(&cli)?;
            commands::run::run(&source, command, *no_override, dotenv)
        }
    }
}
