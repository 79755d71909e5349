//! Get command implementation.

use anyhow::Result;

use crate::config_context::SourceContext;
use crate::error::CliError;

/// Print the value of `key`, or `default` when absent.
///
/// An absent key without a default prints nothing to stdout and fails with
/// `CliError::KeyAbsent`, so scripts can branch on the exit code.
pub fn run(source: &SourceContext, key: &str, default: Option<&str>) -> Result<()> {
    let set = source.load()?;

    match (set.get(key), default) {
        (Some(value), _) => println!("{value}"),
        (None, Some(default)) => {
            tracing::debug!(key, "Key absent, using default");
            println!("{default}");
        }
        (None, None) => return Err(CliError::KeyAbsent(key.to_string()).into()),
    }

    Ok(())
}
