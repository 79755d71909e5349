//! List command implementation.

use anyhow::Result;

use crate::args::OutputFormat;
use crate::config_context::SourceContext;
use crate::formatters::format_set;

pub fn run(source: &SourceContext, format: OutputFormat, reveal: bool) -> Result<()> {
    let set = source.load()?;
    print!("{}", format_set(&set, format, reveal)?);
    Ok(())
}
