//! Recursive prune-and-reindex.

use crate::value::{Collection, Value};

/// Recursively removes empty values from a nested collection.
///
/// An entry is dropped when its value is empty under
/// [`Value::is_empty_value`], evaluated per entry: a nested collection is
/// pruned first (depth-first), and dropped only if the pruned result is
/// itself empty. When `reset_index` is true, every nested collection that
/// ends up with only integer keys is renumbered from zero; the top level is
/// returned with its keys as they are.
///
/// A non-collection input is returned unchanged.
pub fn prune_empty(value: &Value, reset_index: bool) -> Value {
    prune_with(value, &Value::is_empty_value, reset_index)
}

/// Recursively removes null values from a nested collection.
///
/// Only values that are exactly null are dropped; `false`, `0` and the
/// empty string survive, and so does a collection that becomes empty after
/// its own null entries are removed (an empty collection is not null).
/// `reset_index` behaves as in [`prune_empty`].
///
/// A non-collection input is returned unchanged.
pub fn prune_null(value: &Value, reset_index: bool) -> Value {
    prune_with(value, &Value::is_null, reset_index)
}

/// One shared walk; the two pruners differ only in the drop predicate.
///
/// `reset_index` is stable across the whole recursion, and a child is
/// reindexed only when it is exactly integer indexed, so a grandchild can
/// be renumbered while its mixed-key parent keeps its key set.
fn prune_with<F>(value: &Value, drop: &F, reset_index: bool) -> Value
where
    F: Fn(&Value) -> bool,
{
    let Value::Coll(coll) = value else {
        return value.clone();
    };

    let mut result = Collection::new();
    for (key, entry) in coll.iter() {
        if drop(entry) {
            continue;
        }
        if !entry.is_coll() {
            result.insert(key.clone(), entry.clone());
            continue;
        }

        let pruned = prune_with(entry, drop, reset_index);
        if drop(&pruned) {
            continue;
        }
        let pruned = match pruned {
            Value::Coll(child) if reset_index && child.is_integer_indexed() => {
                Value::Coll(child.reset_int_keys())
            }
            other => other,
        };
        result.insert(key.clone(), pruned);
    }

    Value::Coll(result)
}
