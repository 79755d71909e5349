//! Property-based tests for line-oriented loading.
//!
//! These tests verify the lookup contract of loaded configuration sets using
//! randomly generated sources, to catch edge cases unit tests might miss.
//!
//! Test coverage:
//! - Trimming: padded keys and values come back trimmed
//! - Last write wins for duplicate keys
//! - Absent keys return the caller's default, or None without one
//! - Malformed lines never abort a permissive load
//! - Rendering then parsing reproduces the mapping

use proptest::prelude::*;
use std::collections::BTreeMap;

use envset_config::{ConfigSet, LoadOptions, parse_str, render_lines};

/// Strategy for setting keys in the conventional upper-snake style.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}".prop_map(String::from)
}

/// Strategy for values: printable text without line breaks, may contain `=` and `#`.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 =#:/._@-]{0,32}".prop_map(String::from)
}

/// Strategy for horizontal padding around keys and values.
fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}".prop_map(String::from)
}

fn pairs_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 0..20)
}

proptest! {
    #[test]
    fn prop_lookup_returns_trimmed_value(
        pairs in pairs_strategy(),
        pad in padding_strategy(),
    ) {
        let source: String = pairs
            .iter()
            .map(|(k, v)| format!("{pad}{k}{pad}={pad}{v}{pad}\n"))
            .collect();

        let set = parse_str(&source, &LoadOptions::strict()).unwrap();

        prop_assert_eq!(set.len(), pairs.len());
        for (key, value) in &pairs {
            prop_assert_eq!(set.get(key).map(String::as_str), Some(value.trim()));
        }
    }

    #[test]
    fn prop_last_write_wins(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        let source = format!("{key}={first}\n# separator\n{key}={second}\n");
        let set = parse_str(&source, &LoadOptions::new()).unwrap();

        prop_assert_eq!(set.get_or(&key, "<absent>"), second.trim());
    }

    #[test]
    fn prop_absent_key_returns_default_or_none(
        pairs in pairs_strategy(),
        default in value_strategy(),
    ) {
        let set: ConfigSet = pairs.into_iter().collect();
        // Lowercase keys never collide with generated keys.
        let missing = "missing_key";

        prop_assert!(set.get(missing).is_none());
        prop_assert_eq!(set.get_or(missing, &default), default.as_str());
    }

    #[test]
    fn prop_malformed_lines_are_skipped(
        pairs in pairs_strategy(),
        junk in prop::collection::vec("[a-z][a-z0-9 ]{0,10}", 0..5),
    ) {
        let mut source = String::new();
        for line in &junk {
            source.push_str(line);
            source.push('\n');
        }
        source.push_str(&render_lines(&pairs.clone().into_iter().collect()));

        let set = parse_str(&source, &LoadOptions::new()).unwrap();
        prop_assert_eq!(set.len(), pairs.len());
    }

    #[test]
    fn prop_render_round_trip(pairs in pairs_strategy()) {
        let expected: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect();
        let set: ConfigSet = pairs.into_iter().collect();

        let reparsed = parse_str(&render_lines(&set), &LoadOptions::strict()).unwrap();
        prop_assert_eq!(reparsed.into_entries(), expected);
    }
}
