//! Line-oriented (`KEY=VALUE`) source parsing.
//!
//! Responsibilities:
//! - Read a text source and build a `ConfigSet<String>` from its pairs.
//! - Apply the malformed-line policy selected by `LoadOptions`.
//! - Delegate dotenv syntax to `dotenvy`.
//!
//! Does NOT handle:
//! - Structured documents (see `structured.rs`).
//! - Writing into the process environment (see `env.rs`).
//!
//! Invariants:
//! - Line numbers are 1-based and count every physical line, including comments.
//! - Malformed lines are logged by line number only, never by content.
//! - Later assignments of a key replace earlier ones.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::options::{LineSyntax, LoadOptions};
use crate::constants::{COMMENT_MARKER, KEY_VALUE_SEPARATOR};
use crate::types::ConfigSet;

/// Load a `KEY=VALUE` source with default options (plain syntax, permissive).
///
/// # Errors
///
/// - `ConfigError::SourceNotFound` if the file does not exist.
/// - `ConfigError::SourceUnreadable` for other I/O failures, including
///   content that is not valid UTF-8.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigSet, ConfigError> {
    load_with(path, &LoadOptions::default())
}

/// Load a line-oriented source with explicit options.
///
/// # Errors
///
/// In addition to the errors of [`load`], strict options turn the first
/// malformed line into `ConfigError::MalformedLine` (plain syntax) or
/// `ConfigError::DotenvParse` (dotenv syntax).
pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<ConfigSet, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, &e))?;
    let set = parse_text(&text, options, Some(path.to_path_buf()))?;

    tracing::debug!(
        path = %path.display(),
        count = set.len(),
        syntax = %options.syntax(),
        "Loaded configuration set"
    );

    Ok(set)
}

/// Parse in-memory line-oriented text.
pub fn parse_str(text: &str, options: &LoadOptions) -> Result<ConfigSet, ConfigError> {
    parse_text(text, options, None)
}

fn parse_text(
    text: &str,
    options: &LoadOptions,
    source: Option<PathBuf>,
) -> Result<ConfigSet, ConfigError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    match options.syntax() {
        LineSyntax::Plain => parse_plain(text, options.is_strict(), source),
        LineSyntax::Dotenv => parse_dotenv(text, options.is_strict(), source),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ParsedLine<'a> {
    Skip,
    Pair(&'a str, &'a str),
    Malformed,
}

fn parse_line(raw: &str) -> ParsedLine<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return ParsedLine::Skip;
    }

    match line.split_once(KEY_VALUE_SEPARATOR) {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                ParsedLine::Malformed
            } else {
                ParsedLine::Pair(key, value.trim())
            }
        }
        None => ParsedLine::Malformed,
    }
}

fn parse_plain(
    text: &str,
    strict: bool,
    source: Option<PathBuf>,
) -> Result<ConfigSet, ConfigError> {
    let mut set = ConfigSet::new(source);

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(raw) {
            ParsedLine::Skip => {}
            ParsedLine::Pair(key, value) => {
                set.insert(key.to_string(), value.to_string());
            }
            ParsedLine::Malformed if strict => {
                return Err(ConfigError::MalformedLine { line_number });
            }
            ParsedLine::Malformed => {
                tracing::warn!(line_number, "Skipping malformed line (expected KEY=VALUE)");
            }
        }
    }

    Ok(set)
}

fn parse_dotenv(
    text: &str,
    strict: bool,
    source: Option<PathBuf>,
) -> Result<ConfigSet, ConfigError> {
    let mut set = ConfigSet::new(source);

    for item in dotenvy::from_read_iter(text.as_bytes()) {
        match item {
            Ok((key, value)) => {
                set.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(_, error_index)) if strict => {
                return Err(ConfigError::DotenvParse { error_index });
            }
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                tracing::warn!(error_index, "Skipping unparsable dotenv line");
            }
            Err(_) => return Err(ConfigError::DotenvUnknown),
        }
    }

    Ok(set)
}
