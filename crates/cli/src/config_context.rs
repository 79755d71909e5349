//! Source resolution for command execution.
//!
//! Responsibilities:
//! - Decide which line-oriented source a command reads (`--file`, `ENVSET_FILE`,
//!   or `.env` discovered from the current directory upward).
//! - Build `LoadOptions` from the global flags and load the set.
//!
//! Does NOT handle:
//! - Structured documents named directly on the command line (see `commands::show`).
//!
//! Invariants:
//! - Blank `--file` values are ignored so discovery still applies.
//! - A missing source is reported as `SourceNotFound`, never silently empty.

use anyhow::{Context, Result};
use envset_config::constants::DEFAULT_DOTENV_FILE;
use envset_config::{ConfigError, ConfigSet, LoadOptions, discover, load_with};
use std::path::PathBuf;

use crate::args::Cli;

/// Where to read settings from and how to parse them.
pub(crate) struct SourceContext {
    path: PathBuf,
    options: LoadOptions,
}

impl SourceContext {
    /// Resolve the source path and options from global CLI flags.
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self> {
        let options = LoadOptions::new()
            .with_syntax(cli.syntax.into())
            .with_strict(cli.strict);

        let explicit = cli
            .file
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty());

        let path = match explicit {
            Some(path) => path.clone(),
            None => {
                let cwd = std::env::current_dir().context("Failed to determine current directory")?;
                discover(&cwd, DEFAULT_DOTENV_FILE).ok_or_else(|| ConfigError::SourceNotFound {
                    path: PathBuf::from(DEFAULT_DOTENV_FILE),
                })?
            }
        };

        tracing::debug!(path = %path.display(), "Resolved configuration source");
        Ok(Self { path, options })
    }

    /// Force strict parsing regardless of `--strict`.
    pub(crate) fn strict(mut self) -> Self {
        self.options = self.options.with_strict(true);
        self
    }

    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }

    pub(crate) fn load(&self) -> Result<ConfigSet> {
        let set = load_with(&self.path, &self.options)?;
        Ok(set)
    }
}
