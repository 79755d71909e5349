//! Integration tests for `envset run`.
//!
//! These tests spawn `sh`, so they only run on Unix.

#![cfg(unix)]

mod common;

use common::{envset_cmd, write_source};
use tempfile::TempDir;

#[test]
fn test_run_passes_settings_to_child() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(temp_dir.path(), "run.env", "GREETING=hello\n");

    envset_cmd()
        .arg("-f")
        .arg(&path)
        .args(["run", "--", "sh", "-c", "printf '%s' \"$GREETING\""])
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn test_run_overrides_existing_variables_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(temp_dir.path(), "run.env", "GREETING=from-file\n");

    envset_cmd()
        .env("GREETING", "from-process")
        .arg("-f")
        .arg(&path)
        .args(["run", "--", "sh", "-c", "printf '%s' \"$GREETING\""])
        .assert()
        .success()
        .stdout("from-file");
}

#[test]
fn test_run_no_override_keeps_existing_variables() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(temp_dir.path(), "run.env", "GREETING=from-file\n");

    envset_cmd()
        .env("GREETING", "from-process")
        .arg("-f")
        .arg(&path)
        .args(["run", "--no-override", "--", "sh", "-c", "printf '%s' \"$GREETING\""])
        .assert()
        .success()
        .stdout("from-process");
}

#[test]
fn test_run_passes_through_child_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_source(temp_dir.path(), "run.env", "A=1\n");

    envset_cmd()
        .arg("-f")
        .arg(&path)
        .args(["run", "--", "sh", "-c", "exit 7"])
        .assert()
        .code(7);
}

#[test]
fn test_run_does_not_leak_startup_dotenv_into_child() {
    let temp_dir = TempDir::new().unwrap();
    write_source(temp_dir.path(), ".env", "ONLY_DEV=leaked\nGREETING=from-dotenv\n");
    write_source(temp_dir.path(), "prod.env", "A=1\n");

    envset_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("ONLY_DEV")
        .env_remove("GREETING")
        .args(["-f", "prod.env", "run", "--"])
        .args(["sh", "-c", "printf '%s|%s|%s' \"${ONLY_DEV-unset}\" \"${GREETING-unset}\" \"$A\""])
        .assert()
        .success()
        .stdout("unset|unset|1");
}

#[test]
fn test_run_no_override_ignores_values_from_startup_dotenv() {
    let temp_dir = TempDir::new().unwrap();
    write_source(temp_dir.path(), ".env", "GREETING=from-dotenv\n");
    write_source(temp_dir.path(), "prod.env", "GREETING=from-file\nPRESET=from-file\n");

    envset_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("GREETING")
        .env("PRESET", "from-process")
        .args(["-f", "prod.env", "run", "--no-override", "--"])
        .args(["sh", "-c", "printf '%s|%s' \"$GREETING\" \"$PRESET\""])
        .assert()
        .success()
        .stdout("from-file|from-process");
}
