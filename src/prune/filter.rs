//! Single-level filters.
//!
//! Flat passes over one collection level. Keys are preserved except where a
//! filter documents renumbering.

use crate::value::{Collection, Value};

/// Trims whitespace around string values. Keys are preserved and nested
/// collections are not descended into.
pub fn trim(coll: &Collection) -> Collection {
    coll.iter()
        .map(|(k, v)| {
            let trimmed = match v {
                Value::String(s) => Value::String(s.trim().to_string()),
                other => other.clone(),
            };
            (k.clone(), trimmed)
        })
        .collect()
}

/// Removes entries whose value is empty under [`Value::is_empty_value`].
/// Keys are preserved.
pub fn remove_empty(coll: &Collection) -> Collection {
    retain(coll, |v| !v.is_empty_value())
}

/// Removes entries whose value is exactly null. Keys are preserved.
pub fn remove_null(coll: &Collection) -> Collection {
    retain(coll, |v| !v.is_null())
}

/// Keeps only scalar values (integer, float, string, boolean); null values
/// and nested collections are removed. Keys are preserved.
pub fn remove_not_scalar(coll: &Collection) -> Collection {
    retain(coll, Value::is_scalar)
}

/// Removes nested collections from one level. When `reset_index` is true
/// the remaining values are renumbered from zero, discarding string keys.
pub fn remove_collections(coll: &Collection, reset_index: bool) -> Collection {
    let kept = retain(coll, |v| !v.is_coll());
    if reset_index {
        Collection::from_values(kept.values().cloned())
    } else {
        kept
    }
}

fn retain<F: Fn(&Value) -> bool>(coll: &Collection, keep: F) -> Collection {
    coll.iter()
        .filter(|(_, v)| keep(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
