//! Configuration loader for line-oriented and structured sources.
//!
//! Responsibilities:
//! - Load `KEY=VALUE` sources into `ConfigSet<String>` (plain or dotenv syntax).
//! - Load JSON / YAML documents into `StructuredSet`, preserving nesting.
//! - Provide an opt-in adapter that installs a set into the process environment.
//!
//! Does NOT handle:
//! - Persisting changes back to a source. Sets are read-only snapshots.
//! - Watching sources for changes. Reloading creates a new, independent set.
//!
//! Invariants / Assumptions:
//! - Loading is synchronous and keeps no state between calls.
//! - Malformed lines are skipped unless strict loading is requested.
//! - Only `env.rs` writes to the process environment.

mod discover;
mod env;
mod error;
mod lines;
mod options;
mod render;
mod structured;

#[cfg(test)]
mod tests;

pub use discover::discover;
pub use env::{
    DotenvInstall, EnvMerge, env_var_or, env_var_or_none, install_dotenv, install_into_env,
};
pub use error::ConfigError;
pub use lines::{load, load_with, parse_str};
pub use options::{LineSyntax, LoadOptions};
pub use render::{redact, render_lines};
pub use structured::{
    StructuredFormat, load_structured, load_structured_from, parse_structured_str,
};
