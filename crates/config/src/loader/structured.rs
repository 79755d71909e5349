//! Structured document (JSON / YAML) decoding.
//!
//! Responsibilities:
//! - Pick a decoder from the file extension and decode into `SettingValue` trees.
//! - Require a mapping at the top level so every entry has a setting key.
//! - Follow a line-oriented setting that names a structured document.
//!
//! Does NOT handle:
//! - Line-oriented sources (see `lines.rs`).
//! - Flattening or path lookups (see `types::set`).
//!
//! Invariants:
//! - A decode failure is fatal for the whole call; no partial sets are returned.
//! - Decode errors report positions, never document contents.
//! - Duplicate keys within one mapping resolve to the last occurrence.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::types::{ConfigSet, SettingValue, StructuredSet};

/// Supported structured document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Json,
    Yaml,
}

impl StructuredFormat {
    /// Detect the format from a file extension (`json`, `yaml`, `yml`; case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(StructuredFormat::Json),
            "yaml" | "yml" => Some(StructuredFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for StructuredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuredFormat::Json => f.write_str("JSON"),
            StructuredFormat::Yaml => f.write_str("YAML"),
        }
    }
}

/// Load a structured document, preserving its nesting.
///
/// # Errors
///
/// - `ConfigError::SourceNotFound` / `SourceUnreadable` if the file cannot be read.
/// - `ConfigError::UnknownFormat` if the extension is not recognised.
/// - `ConfigError::DecodeError` if the content is not well-formed or the top
///   level is not a mapping.
pub fn load_structured(path: impl AsRef<Path>) -> Result<StructuredSet, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, &e))?;
    let format = StructuredFormat::from_path(path).ok_or_else(|| ConfigError::UnknownFormat {
        path: path.to_path_buf(),
    })?;

    let set = decode(&text, format, Some(path.to_path_buf()))?;

    tracing::debug!(
        path = %path.display(),
        format = %format,
        count = set.len(),
        "Loaded structured configuration"
    );

    Ok(set)
}

/// Decode in-memory structured text.
pub fn parse_structured_str(
    text: &str,
    format: StructuredFormat,
) -> Result<StructuredSet, ConfigError> {
    decode(text, format, None)
}

/// Load the structured document whose path is stored under `key` in `set`.
///
/// Relative paths resolve against the current working directory.
///
/// # Errors
///
/// `ConfigError::MissingSetting` if `key` is absent or blank, otherwise the
/// errors of [`load_structured`].
pub fn load_structured_from(set: &ConfigSet, key: &str) -> Result<StructuredSet, ConfigError> {
    let location = set
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingSetting {
            key: key.to_string(),
        })?;

    tracing::debug!(key, "Following setting to structured document");
    load_structured(location)
}

fn decode(
    text: &str,
    format: StructuredFormat,
    source: Option<PathBuf>,
) -> Result<StructuredSet, ConfigError> {
    // An empty YAML file is an empty document, not an error.
    if format == StructuredFormat::Yaml && text.trim().is_empty() {
        return Ok(StructuredSet::from_mapping(Default::default(), source));
    }

    let decoded: Result<SettingValue, String> = match format {
        StructuredFormat::Json => serde_json::from_str(text).map_err(|e| json_reason(&e)),
        StructuredFormat::Yaml => serde_yaml::from_str(text).map_err(|e| yaml_reason(&e)),
    };

    match decoded {
        Ok(SettingValue::Mapping(mapping)) => Ok(StructuredSet::from_mapping(mapping, source)),
        Ok(_) => Err(ConfigError::DecodeError {
            path: source,
            format,
            reason: "top-level value is not a mapping".to_string(),
        }),
        Err(reason) => Err(ConfigError::DecodeError {
            path: source,
            format,
            reason,
        }),
    }
}

fn json_reason(err: &serde_json::Error) -> String {
    let category = match err.classify() {
        serde_json::error::Category::Io => "I/O error",
        serde_json::error::Category::Syntax => "syntax error",
        serde_json::error::Category::Data => "invalid value",
        serde_json::error::Category::Eof => "unexpected end of input",
    };
    format!("{category} at line {}, column {}", err.line(), err.column())
}

fn yaml_reason(err: &serde_yaml::Error) -> String {
    match err.location() {
        Some(location) => format!(
            "invalid document at line {}, column {}",
            location.line(),
            location.column()
        ),
        None => "invalid document".to_string(),
    }
}
