//! The configuration set produced by a single load.
//!
//! Responsibilities:
//! - Hold the key/value pairs of one source as an immutable snapshot.
//! - Provide lookup with an explicit absent result (`Option`) and with a
//!   caller-supplied default.
//! - Navigate and flatten nested settings decoded from structured documents.
//!
//! Does NOT handle:
//! - Parsing (see `loader::lines` and `loader::structured`).
//! - Installing values into the process environment (see `loader::env`).
//!
//! Invariants:
//! - Mutation is crate-private and only used while a loader builds the set.
//! - An empty-string value is a present value, distinct from an absent key.

use secrecy::SecretString;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::value::SettingValue;
use crate::constants::DEFAULT_FLATTEN_SEPARATOR;

/// A configuration set whose values are decoded structured settings.
pub type StructuredSet = ConfigSet<SettingValue>;

/// Immutable mapping from setting keys to values, produced by one load call.
///
/// Line-oriented sources produce `ConfigSet<String>`; structured documents
/// produce [`StructuredSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSet<V = String> {
    entries: BTreeMap<String, V>,
    source: Option<PathBuf>,
}

impl<V> ConfigSet<V> {
    pub(crate) fn new(source: Option<PathBuf>) -> Self {
        Self {
            entries: BTreeMap::new(),
            source,
        }
    }

    /// Record a pair, replacing any earlier value for the same key.
    pub(crate) fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the value for `key`, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    pub fn get_or_value<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.entries.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn entries(&self) -> &BTreeMap<String, V> {
        &self.entries
    }

    pub fn into_entries(self) -> BTreeMap<String, V> {
        self.entries
    }

    /// Path of the file this set was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl ConfigSet<String> {
    /// Returns the value for `key`, or `default` when the key is absent.
    ///
    /// A key present with an empty value returns the empty string, not `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Returns the value for `key` wrapped as a secret, so it is not printed
    /// by `Debug` formatting downstream.
    pub fn get_secret(&self, key: &str) -> Option<SecretString> {
        self.entries
            .get(key)
            .map(|value| SecretString::new(value.clone().into()))
    }
}

impl ConfigSet<SettingValue> {
    pub(crate) fn from_mapping(
        mapping: BTreeMap<String, SettingValue>,
        source: Option<PathBuf>,
    ) -> Self {
        Self {
            entries: mapping,
            source,
        }
    }

    /// Look up a nested setting by a `.`-separated path such as `db.hosts.0`.
    ///
    /// A top-level key that itself contains `.` is matched first. Numeric
    /// segments index into sequences.
    pub fn get_path(&self, path: &str) -> Option<&SettingValue> {
        if let Some(value) = self.entries.get(path) {
            return Some(value);
        }

        let mut segments = path.split(DEFAULT_FLATTEN_SEPARATOR);
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Flatten nested mappings and sequences into plain string settings.
    ///
    /// Nested keys are joined with `separator`; sequence elements use their
    /// index. Scalars are rendered as text and null becomes the empty string.
    /// Empty containers are kept as `{}` / `[]` so no key disappears.
    pub fn flatten(&self, separator: &str) -> ConfigSet<String> {
        let mut flat = ConfigSet::new(self.source.clone());
        for (key, value) in &self.entries {
            flatten_into(&mut flat, key.clone(), value, separator);
        }
        flat
    }
}

fn flatten_into(out: &mut ConfigSet<String>, prefix: String, value: &SettingValue, sep: &str) {
    match value {
        SettingValue::Mapping(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(out, format!("{prefix}{sep}{key}"), child, sep);
            }
        }
        SettingValue::Sequence(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, format!("{prefix}{sep}{index}"), child, sep);
            }
        }
        other => {
            out.insert(prefix, other.render());
        }
    }
}

impl<V> Default for ConfigSet<V> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Builds an in-memory set. Later pairs win; pairs with an empty key are dropped.
impl<V> FromIterator<(String, V)> for ConfigSet<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut set = Self::new(None);
        for (key, value) in iter {
            if !key.is_empty() {
                set.insert(key, value);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn sample() -> ConfigSet {
        [
            ("DB_NAME".to_string(), "mydb".to_string()),
            ("EMPTY".to_string(), String::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_returns_none_for_absent_key() {
        let set = sample();
        assert_eq!(set.get("DB_NAME").map(String::as_str), Some("mydb"));
        assert!(set.get("DB_HOST").is_none());
    }

    #[test]
    fn test_get_or_only_falls_back_when_absent() {
        let set = sample();
        assert_eq!(set.get_or("DB_HOST", "localhost"), "localhost");
        assert_eq!(set.get_or("EMPTY", "fallback"), "");
    }

    #[test]
    fn test_get_secret_exposes_original_value() {
        let set = sample();
        let secret = set.get_secret("DB_NAME").unwrap();
        assert_eq!(secret.expose_secret(), "mydb");
        assert!(!format!("{:?}", secret).contains("mydb"));
    }

    #[test]
    fn test_from_iter_last_write_wins_and_drops_empty_keys() {
        let set: ConfigSet = [
            ("K".to_string(), "1".to_string()),
            (String::new(), "x".to_string()),
            ("K".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get_or("K", ""), "2");
        assert!(set.source().is_none());
    }

    fn structured() -> StructuredSet {
        let mut db = BTreeMap::new();
        db.insert("host".to_string(), SettingValue::Text("db.local".into()));
        db.insert("port".to_string(), SettingValue::Integer(5432));
        db.insert(
            "replicas".to_string(),
            SettingValue::Sequence(vec![
                SettingValue::Text("r1".into()),
                SettingValue::Text("r2".into()),
            ]),
        );
        db.insert("extra".to_string(), SettingValue::Mapping(BTreeMap::new()));

        let mut root = BTreeMap::new();
        root.insert("db".to_string(), SettingValue::Mapping(db));
        root.insert("debug".to_string(), SettingValue::Bool(true));
        root.insert("a.b".to_string(), SettingValue::Null);
        StructuredSet::from_mapping(root, None)
    }

    #[test]
    fn test_get_path_walks_mappings_and_sequences() {
        let set = structured();
        assert_eq!(
            set.get_path("db.host"),
            Some(&SettingValue::Text("db.local".into()))
        );
        assert_eq!(
            set.get_path("db.replicas.1"),
            Some(&SettingValue::Text("r2".into()))
        );
        assert!(set.get_path("db.replicas.7").is_none());
        assert!(set.get_path("db.port.x").is_none());
        assert_eq!(set.get_path("a.b"), Some(&SettingValue::Null));
    }

    #[test]
    fn test_flatten_joins_keys_with_separator() {
        let flat = structured().flatten("__");
        assert_eq!(flat.get_or("db__host", ""), "db.local");
        assert_eq!(flat.get_or("db__port", ""), "5432");
        assert_eq!(flat.get_or("db__replicas__0", ""), "r1");
        assert_eq!(flat.get_or("db__extra", ""), "{}");
        assert_eq!(flat.get_or("debug", ""), "true");
        assert_eq!(flat.get("a.b").map(String::as_str), Some(""));
    }
}
