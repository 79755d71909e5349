//! Resolve command implementation.
//!
//! Follows a setting whose value is the path of a structured document (for
//! example a credentials file) and prints the decoded document.

use anyhow::Result;
use envset_config::load_structured_from;

use crate::args::OutputFormat;
use crate::config_context::SourceContext;
use crate::formatters::format_value;

pub fn run(source: &SourceContext, key: &str, format: OutputFormat) -> Result<()> {
    let set = source.load()?;
    let document = load_structured_from(&set, key)?;
    print!("{}", format_value(document.entries(), format)?);
    Ok(())
}
