//! Configuration type definitions for envset.
//!
//! Responsibilities:
//! - Define `ConfigSet`, the immutable key/value snapshot produced by one load.
//! - Define `SettingValue`, the tree of scalars, sequences and mappings decoded
//!   from structured documents.
//!
//! Does NOT handle:
//! - Reading or parsing sources (see `loader` module).
//! - Writing to the process environment (see `loader::env`).
//!
//! Invariants:
//! - Keys are non-empty and unique; a later assignment replaces an earlier one.
//! - A `ConfigSet` has no public mutators. Reloading yields a new, independent set.

mod set;
mod value;

pub use set::{ConfigSet, StructuredSet};
pub use value::SettingValue;
