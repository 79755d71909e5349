//! Values decoded from structured documents.
//!
//! Decoding rules:
//! - Scalar mapping keys (`80: http`, `true: on`) become string keys.
//! - Integers above `i64::MAX` stay exact as `Unsigned`.
//! - YAML tags are dropped; the tagged value is kept.

use serde::de::{self, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A setting value from a structured document: a scalar, an ordered
/// sequence, or a nested mapping of settings.
///
/// Decoding is format-agnostic, so the same tree comes out of JSON and YAML.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Only used for integers that do not fit in `i64`.
    Unsigned(u64),
    Float(f64),
    Text(String),
    Sequence(Vec<SettingValue>),
    Mapping(BTreeMap<String, SettingValue>),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(n) => Some(*n),
            SettingValue::Unsigned(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            SettingValue::Integer(n) => u64::try_from(*n).ok(),
            SettingValue::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    /// Integers are widened so callers don't need to care how a number was written.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(n) => Some(*n),
            SettingValue::Integer(n) => Some(*n as f64),
            SettingValue::Unsigned(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[SettingValue]> {
        match self {
            SettingValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, SettingValue>> {
        match self {
            SettingValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }

    /// Child of a mapping by key, or of a sequence by decimal index.
    pub fn child(&self, segment: &str) -> Option<&SettingValue> {
        match self {
            SettingValue::Mapping(map) => map.get(segment),
            SettingValue::Sequence(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Plain-text rendering: strings as-is, null as empty, containers as compact JSON.
    pub fn render(&self) -> String {
        match self {
            SettingValue::Null => String::new(),
            SettingValue::Bool(b) => b.to_string(),
            SettingValue::Integer(n) => n.to_string(),
            SettingValue::Unsigned(n) => n.to_string(),
            SettingValue::Float(n) => n.to_string(),
            SettingValue::Text(s) => s.clone(),
            SettingValue::Sequence(_) | SettingValue::Mapping(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }

    /// Text used when this value appears as a mapping key.
    fn into_key(self) -> String {
        match self {
            SettingValue::Text(s) => s,
            SettingValue::Null => "null".to_string(),
            other => other.render(),
        }
    }
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SettingValueVisitor)
    }
}

struct SettingValueVisitor;

impl<'de> Visitor<'de> for SettingValueVisitor {
    type Value = SettingValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a setting value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<SettingValue, E> {
        Ok(SettingValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<SettingValue, E> {
        Ok(SettingValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<SettingValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        SettingValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<SettingValue, E> {
        Ok(SettingValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<SettingValue, E> {
        Ok(SettingValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<SettingValue, E> {
        Ok(i64::try_from(value).map_or(SettingValue::Unsigned(value), SettingValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<SettingValue, E> {
        Ok(SettingValue::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SettingValue, E> {
        Ok(SettingValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<SettingValue, E> {
        Ok(SettingValue::Text(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<SettingValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(SettingValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<SettingValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<SettingValue, SettingValue>()? {
            // Later duplicates replace earlier ones.
            entries.insert(key.into_key(), value);
        }
        Ok(SettingValue::Mapping(entries))
    }

    // YAML tags (`!Secret value`) arrive as single-variant enums.
    fn visit_enum<A>(self, data: A) -> Result<SettingValue, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_tag, variant) = data.variant::<String>()?;
        variant.newtype_variant()
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<u64> for SettingValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(SettingValue::Unsigned(value), SettingValue::Integer)
    }
}
