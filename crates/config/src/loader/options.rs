//! Options controlling how line-oriented sources are parsed.
//!
//! Invariants:
//! - The default is plain syntax with permissive handling of malformed lines.

use std::fmt;
use std::str::FromStr;

/// Syntax used to interpret a line-oriented source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineSyntax {
    /// `KEY=VALUE`, split at the first `=`, both sides trimmed, no quoting.
    #[default]
    Plain,
    /// dotenv syntax handled by `dotenvy`: quotes, escapes, `export`, `${VAR}`.
    Dotenv,
}

impl fmt::Display for LineSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSyntax::Plain => f.write_str("plain"),
            LineSyntax::Dotenv => f.write_str("dotenv"),
        }
    }
}

impl FromStr for LineSyntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(LineSyntax::Plain),
            "dotenv" => Ok(LineSyntax::Dotenv),
            other => Err(format!("unknown syntax '{other}' (expected plain or dotenv)")),
        }
    }
}

/// Options for `load_with` and `parse_str`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    syntax: LineSyntax,
    strict: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first malformed line instead of skipping it.
    pub fn strict() -> Self {
        Self::default().with_strict(true)
    }

    pub fn with_syntax(mut self, syntax: LineSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn syntax(&self) -> LineSyntax {
        self.syntax
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
