//! Rendering configuration sets back to text.
//!
//! Invariants:
//! - Output is one `KEY=VALUE` line per pair, in ascending key order.
//! - Loading rendered output with plain syntax reproduces the trimmed mapping,
//!   provided no value contains a line break.

use crate::constants::REDACTED;
use crate::types::ConfigSet;

/// Render a set in the line-oriented format.
pub fn render_lines(set: &ConfigSet) -> String {
    let mut out = String::new();
    for (key, value) in set.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Mask a value for display. Empty values stay empty so "set but blank"
/// remains distinguishable.
pub fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { REDACTED }
}
