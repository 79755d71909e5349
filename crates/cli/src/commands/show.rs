//! Show command implementation.

use anyhow::{Context, Result};
use envset_config::{SettingValue, StructuredSet, load_structured};
use std::path::Path;

use crate::args::OutputFormat;
use crate::error::CliError;
use crate::formatters::format_value;

/// Options for the `show` command.
pub struct ShowOptions<'a> {
    /// Dotted path of a single setting to print.
    pub path: Option<&'a str>,
    pub flatten: bool,
    pub separator: &'a str,
    pub format: OutputFormat,
}

impl ShowOptions<'_> {
    fn flat_output(&self) -> bool {
        self.flatten || self.format == OutputFormat::Env
    }
}

pub fn run(document: &Path, options: &ShowOptions<'_>) -> Result<()> {
    let set = load_structured(document)
        .with_context(|| format!("Failed to load {}", document.display()))?;

    let output = match options.path {
        Some(path) => {
            let value = set
                .get_path(path)
                .ok_or_else(|| CliError::KeyAbsent(path.to_string()))?;
            format_setting(path, value, options)?
        }
        None if options.flat_output() => {
            format_value(set.flatten(options.separator).entries(), options.format)?
        }
        None => format_value(set.entries(), options.format)?,
    };

    print!("{output}");
    Ok(())
}

/// Nested values are flattened under `path`; scalars print as plain text in env format.
fn format_setting(path: &str, value: &SettingValue, options: &ShowOptions<'_>) -> Result<String> {
    let nested = matches!(value, SettingValue::Mapping(_) | SettingValue::Sequence(_));

    if nested && options.flat_output() {
        let subtree: StructuredSet = std::iter::once((path.to_string(), value.clone())).collect();
        return format_value(subtree.flatten(options.separator).entries(), options.format);
    }

    match options.format {
        OutputFormat::Env => Ok(format!("{}\n", value.render())),
        OutputFormat::Json | OutputFormat::Yaml => format_value(value, options.format),
    }
}
