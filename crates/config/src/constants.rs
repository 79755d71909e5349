//! Centralized constants for the envset workspace.
//!
//! Source syntax markers and well-known file and variable names shared by
//! the loader and the CLI.

// =============================================================================
// Line-oriented Syntax
// =============================================================================

/// Lines whose first non-whitespace character is this marker are ignored.
pub const COMMENT_MARKER: char = '#';

/// Separator between key and value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

// =============================================================================
// Structured Documents
// =============================================================================

/// Default separator used when flattening nested settings into plain keys.
pub const DEFAULT_FLATTEN_SEPARATOR: &str = ".";

// =============================================================================
// Well-known Names
// =============================================================================

/// File name searched for by `discover` and `install_dotenv`.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// When set to `1` or `true`, `install_dotenv` does nothing.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Mask printed in place of setting values that should not be shown.
pub const REDACTED: &str = "********";
