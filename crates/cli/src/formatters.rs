//! Output formatting for settings.
//!
//! Responsibilities:
//! - Render line-oriented sets as env lines, JSON or YAML, masking values on request.
//! - Render structured settings as JSON or YAML.
//!
//! Invariants:
//! - Rendered output always ends with a newline.
//! - Masked output never contains the original value.

use anyhow::{Context, Result};
use envset_config::{ConfigSet, redact, render_lines};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::args::OutputFormat;

/// Render a line-oriented set. Values are masked unless `reveal` is set.
pub(crate) fn format_set(set: &ConfigSet, format: OutputFormat, reveal: bool) -> Result<String> {
    let shown: ConfigSet = set
        .iter()
        .map(|(key, value)| {
            let value = if reveal { value } else { redact(value) };
            (key.to_string(), value.to_string())
        })
        .collect();

    match format {
        OutputFormat::Env => Ok(render_lines(&shown)),
        OutputFormat::Json | OutputFormat::Yaml => format_value(shown.entries(), format),
    }
}

/// Render any serializable settings tree as JSON or YAML.
pub(crate) fn format_value<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML"),
        OutputFormat::Env => {
            // Only string maps have an env representation.
            let json = serde_json::to_value(value).context("Failed to render settings")?;
            let map: BTreeMap<String, String> = serde_json::from_value(json)
                .context("Only flat string settings can be rendered as env lines")?;
            Ok(render_lines(&map.into_iter().collect()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envset_config::constants::REDACTED;

    fn sample() -> ConfigSet {
        [("TOKEN", "abc123"), ("BLANK", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_format_masks_by_default() {
        let out = format_set(&sample(), OutputFormat::Env, false).unwrap();
        assert_eq!(out, format!("BLANK=\nTOKEN={REDACTED}\n"));
        assert!(!out.contains("abc123"));
    }

    #[test]
    fn test_json_format_reveals_when_asked() {
        let out = format_set(&sample(), OutputFormat::Json, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["TOKEN"], "abc123");
        assert_eq!(parsed["BLANK"], "");
    }

    #[test]
    fn test_yaml_format() {
        let out = format_set(&sample(), OutputFormat::Yaml, true).unwrap();
        assert!(out.contains("TOKEN: abc123"), "{out}");
    }

    #[test]
    fn test_env_format_rejects_nested_values() {
        let nested = serde_json::json!({"db": {"host": "x"}});
        assert!(format_value(&nested, OutputFormat::Env).is_err());
    }
}
