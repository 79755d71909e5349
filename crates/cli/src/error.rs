//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and CLI outcomes to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - A child process exit status is passed through unchanged by `run`.

use envset_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for envset. Success is the implicit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The source file does not exist.
    SourceNotFound = 2,

    /// A structured document could not be decoded.
    DecodeError = 3,

    /// The requested key is absent and no default was given.
    ///
    /// Scripts can branch on this without parsing stderr.
    KeyAbsent = 4,

    /// A malformed line was found under strict loading.
    MalformedLine = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::SourceNotFound { .. } => ExitCode::SourceNotFound,
            ConfigError::DecodeError { .. } | ConfigError::UnknownFormat { .. } => {
                ExitCode::DecodeError
            }
            ConfigError::MissingSetting { .. } => ExitCode::KeyAbsent,
            ConfigError::MalformedLine { .. } | ConfigError::DotenvParse { .. } => {
                ExitCode::MalformedLine
            }
            ConfigError::SourceUnreadable { .. } | ConfigError::DotenvUnknown => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Outcomes that end the CLI with a specific status but are not library errors.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Setting '{0}' is not set")]
    KeyAbsent(String),

    #[error("Command exited with status {0}")]
    ChildExit(i32),
}

/// Extension trait to extract an exit code from an anyhow error chain.
pub trait ExitCodeExt {
    fn exit_code(&self) -> i32;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> i32 {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CliError>() {
                return match err {
                    CliError::KeyAbsent(_) => ExitCode::KeyAbsent.as_i32(),
                    CliError::ChildExit(code) => *code,
                };
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err).as_i32();
            }
        }
        ExitCode::GeneralError.as_i32()
    }
}
