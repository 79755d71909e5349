//! Process environment adapter.
//!
//! Responsibilities:
//! - Install a loaded `ConfigSet` into the process environment on request.
//! - Discover and install a `.env` file, gated by `DOTENV_DISABLED`.
//! - Provide helpers for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Parsing sources (see `lines.rs`).
//! - Removing installed variables. There is no teardown: installed values
//!   live until the process exits or something else overwrites them.
//!
//! Invariants:
//! - This is the only module in the crate that mutates the process environment.
//! - Keys containing `=` or NUL, and values containing NUL, are skipped.
//! - Values are never logged.

use std::path::{Path, PathBuf};

use super::discover::discover;
use super::error::ConfigError;
use super::lines::load;
use crate::constants::{DEFAULT_DOTENV_FILE, DOTENV_DISABLED_VAR};
use crate::types::ConfigSet;

/// How `install_into_env` treats variables that are already set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvMerge {
    /// Replace existing variables with values from the set.
    #[default]
    Overwrite,
    /// Leave existing variables untouched; only add missing ones.
    PreserveExisting,
}

/// Write every pair of `set` into the process environment.
///
/// Returns the number of variables written. The change has process-lifetime
/// scope. Call this before spawning threads: other threads reading the
/// environment concurrently is undefined behaviour on some platforms.
pub fn install_into_env(set: &ConfigSet, merge: EnvMerge) -> usize {
    install_pairs(set, merge).len()
}

/// Installs `set` and returns the keys that were actually written.
fn install_pairs(set: &ConfigSet, merge: EnvMerge) -> Vec<String> {
    let mut written = Vec::new();

    for (key, value) in set.iter() {
        if key.contains(['=', '\0']) || value.contains('\0') {
            tracing::warn!(key, "Skipping setting that cannot be stored in the environment");
            continue;
        }
        if merge == EnvMerge::PreserveExisting && std::env::var_os(key).is_some() {
            continue;
        }

        // SAFETY: keys and values were checked above, and callers install
        // before other threads read the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        written.push(key.to_string());
    }

    tracing::debug!(
        written = written.len(),
        total = set.len(),
        ?merge,
        "Installed configuration set into process environment"
    );

    written
}

/// Result of a successful [`install_dotenv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvInstall {
    /// The `.env` file that was loaded.
    pub path: PathBuf,
    /// Keys written to the environment. Variables that were already set are
    /// not listed because they were left untouched.
    pub installed: Vec<String>,
}

impl DotenvInstall {
    /// Whether `key` got its current value from the `.env` file.
    pub fn is_installed(&self, key: &str) -> bool {
        self.installed.iter().any(|k| k == key)
    }
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Find a `.env` file from the current directory upward, load it and install
/// it without overriding variables that are already set.
///
/// If `DOTENV_DISABLED` is "true" or "1" nothing is read (useful for tests).
/// Returns the installed file and the keys it wrote, or `None` if no file was
/// found or loading is disabled.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// discovered file cannot be read.
pub fn install_dotenv() -> Result<Option<DotenvInstall>, ConfigError> {
    if dotenv_disabled() {
        return Ok(None);
    }

    let cwd = std::env::current_dir().map_err(|e| ConfigError::from_io(Path::new("."), &e))?;
    let Some(path) = discover(&cwd, DEFAULT_DOTENV_FILE) else {
        return Ok(None);
    };

    let set = load(&path)?;
    let installed = install_pairs(&set, EnvMerge::PreserveExisting);
    Ok(Some(DotenvInstall { path, installed }))
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read an environment variable like [`env_var_or_none`], falling back to `default`.
pub fn env_var_or(key: &str, default: &str) -> String {
    env_var_or_none(key).unwrap_or_else(|| default.to_string())
}
