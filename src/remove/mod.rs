//! Remove module - removal of entries by key.
//!
//! Keys to remove are given as a recursive union of scalar keys and nested
//! key lists, flattened by one shared walk. Remaining entries keep their
//! keys and order; nothing is renumbered.

use crate::value::{Collection, Key};

/// KeySpec is a key to remove: a single key or a nested list of KeySpecs.
///
/// Scalar keys pass through the usual [`Key`] normalization, so `"5"` and
/// `5` name the same entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySpec {
    Key(Key),
    List(Vec<KeySpec>),
}

impl From<Key> for KeySpec {
    fn from(key: Key) -> Self {
        KeySpec::Key(key)
    }
}

impl From<i64> for KeySpec {
    fn from(i: i64) -> Self {
        KeySpec::Key(Key::from(i))
    }
}

impl From<&str> for KeySpec {
    fn from(s: &str) -> Self {
        KeySpec::Key(Key::from(s))
    }
}

impl From<String> for KeySpec {
    fn from(s: String) -> Self {
        KeySpec::Key(Key::from(s))
    }
}

impl<T: Into<KeySpec>> From<Vec<T>> for KeySpec {
    fn from(specs: Vec<T>) -> Self {
        KeySpec::List(specs.into_iter().map(Into::into).collect())
    }
}

/// Removes entries by the given keys and returns the new collection.
///
/// Missing keys are ignored; the surviving entries keep their keys.
pub fn remove_by_keys(coll: &Collection, keys: &[KeySpec]) -> Collection {
    let mut result = coll.clone();
    remove_by_keys_in_place(&mut result, keys);
    result
}

/// Removes entries by the given keys, mutating the caller's collection.
/// Nothing is returned.
pub fn remove_by_keys_in_place(coll: &mut Collection, keys: &[KeySpec]) {
    for spec in keys {
        match spec {
            KeySpec::Key(key) => {
                coll.remove(key);
            }
            KeySpec::List(nested) => remove_by_keys_in_place(coll, nested),
        }
    }
}
