//! Check command implementation.

use anyhow::Result;

use crate::config_context::SourceContext;

/// Parse the source strictly; the first malformed line fails the command.
pub fn run(source: SourceContext) -> Result<()> {
    let source = source.strict();
    let set = source.load()?;
    println!(
        "{}: {} setting{} OK",
        source.path().display(),
        set.len(),
        if set.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
