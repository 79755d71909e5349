//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test line-oriented loading, malformed-line policy and dotenv syntax.
//! - Test structured document loading and indirection through a setting.
//! - Test source discovery and the process environment adapter.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd hold `env_lock()` and are `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
