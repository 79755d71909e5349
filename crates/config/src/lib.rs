//! Configuration loading for envset.
//!
//! This crate reads `KEY=VALUE` sources and structured (JSON / YAML)
//! documents into immutable configuration sets, and provides an explicitly
//! scoped adapter for installing a set into the process environment.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, DotenvInstall, EnvMerge, LineSyntax, LoadOptions, StructuredFormat, discover,
    env_var_or, env_var_or_none, install_dotenv, install_into_env, load, load_structured,
    load_structured_from, load_with, parse_str, parse_structured_str, redact, render_lines,
};
pub use types::{ConfigSet, SettingValue, StructuredSet};
