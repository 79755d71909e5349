//! Run command implementation.

use anyhow::{Context, Result};
use envset_config::DotenvInstall;
use std::process::Command;

use crate::config_context::SourceContext;
use crate::error::CliError;

/// Spawn `command` with the loaded settings in its environment and wait for it.
///
/// The child inherits the environment this process started with: variables
/// that the startup `.env` installed are removed unless the loaded source
/// sets them again. With `no_override`, only variables that existed before
/// startup count as already set.
pub fn run(
    source: &SourceContext,
    command: &[String],
    no_override: bool,
    dotenv: Option<&DotenvInstall>,
) -> Result<()> {
    let set = source.load()?;
    let (program, args) = command
        .split_first()
        .context("No command given")?;

    let from_dotenv = |key: &str| dotenv.is_some_and(|d| d.is_installed(key));

    let mut child = Command::new(program);
    child.args(args);
    if let Some(dotenv) = dotenv {
        for key in &dotenv.installed {
            child.env_remove(key);
        }
    }
    for (key, value) in set.iter() {
        if no_override && !from_dotenv(key) && std::env::var_os(key).is_some() {
            continue;
        }
        child.env(key, value);
    }

    tracing::debug!(program, count = set.len(), "Spawning command with settings");
    let status = child
        .status()
        .with_context(|| format!("Failed to run '{program}'"))?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(CliError::ChildExit(code).into()),
        // Terminated by a signal.
        None => Err(CliError::ChildExit(1).into()),
    }
}
