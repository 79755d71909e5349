//! Shared test utilities for envset integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write source files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `envset` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVSET_*` variables from the host are cleared.
pub fn envset_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envset");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("ENVSET_FILE")
        .env_remove("ENVSET_SYNTAX")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `dir/name` and return the full path.
#[allow(dead_code)]
pub fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test source");
    path
}

/// The database example used across tests.
#[allow(dead_code)]
pub const DB_SOURCE: &str = "DB_NAME=mydb\nDB_USER=admin\n# comment\nDB_PASS=secret\n";
