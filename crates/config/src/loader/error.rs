//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Map I/O and decoder errors into variants that carry paths and positions.
//!
//! Does NOT handle:
//! - Absent keys on lookup (those are `None`, not errors).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, line numbers, positions).
//! - Errors NEVER include raw source contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::structured::StructuredFormat;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read configuration source at {path}: {kind}")]
    SourceUnreadable { path: PathBuf, kind: ErrorKind },

    /// A line with no `=` or an empty key, reported under strict loading.
    ///
    /// SAFETY: Only the 1-based line number is reported, never the line itself.
    #[error("Malformed line {line_number}: expected KEY=VALUE")]
    MalformedLine { line_number: usize },

    #[error("Failed to decode {format} document{}: {reason}", display_path(.path))]
    DecodeError {
        path: Option<PathBuf>,
        format: StructuredFormat,
        reason: String,
    },

    #[error("Unsupported structured document type: {path} (expected .json, .yaml or .yml)")]
    UnknownFormat { path: PathBuf },

    #[error("Setting '{key}' is not set")]
    MissingSetting { key: String },

    /// Failed to parse a source using dotenv syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse dotenv source at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load dotenv source. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Classify an I/O failure on `path`.
    pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> Self {
        if err.kind() == ErrorKind::NotFound {
            ConfigError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::SourceUnreadable {
                path: path.to_path_buf(),
                kind: err.kind(),
            }
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_distinguishes_not_found() {
        let path = Path::new("missing.env");
        let not_found = std::io::Error::from(ErrorKind::NotFound);
        let denied = std::io::Error::from(ErrorKind::PermissionDenied);

        assert!(matches!(
            ConfigError::from_io(path, &not_found),
            ConfigError::SourceNotFound { .. }
        ));
        assert!(matches!(
            ConfigError::from_io(path, &denied),
            ConfigError::SourceUnreadable {
                kind: ErrorKind::PermissionDenied,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_error_message_includes_path_when_known() {
        let err = ConfigError::DecodeError {
            path: Some(PathBuf::from("creds.json")),
            format: StructuredFormat::Json,
            reason: "syntax error at line 1, column 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to decode JSON document at creds.json: syntax error at line 1, column 2"
        );

        let err = ConfigError::DecodeError {
            path: None,
            format: StructuredFormat::Yaml,
            reason: "top-level value is not a mapping".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to decode YAML document: top-level value is not a mapping"
        );
    }
}
