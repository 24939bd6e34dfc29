//! The ordered mixed-key collection.

use super::key::Key;
use super::value::Value;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Collection is an ordered sequence of key/value pairs with unique keys.
///
/// Keys may be integers and strings mixed within the same collection.
/// Insertion order is significant and is preserved by every operation that
/// does not explicitly reindex; inserting an existing key overwrites the
/// value in place without moving the entry.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: IndexMap<Key, Value>,
}

impl Collection {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Collection {
            entries: IndexMap::new(),
        }
    }

    /// Creates a collection from key/value pairs, in order.
    ///
    /// Later pairs with an already-seen key overwrite in place.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut coll = Collection::new();
        for (k, v) in pairs {
            coll.insert(k, v);
        }
        coll
    }

    /// Creates a sequentially indexed collection from values (keys `0..n`).
    pub fn from_values<V, I>(values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let mut coll = Collection::new();
        for v in values {
            coll.push(v.into());
        }
        coll
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under the given key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under the given key.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value under a key.
    ///
    /// An existing key is overwritten in place; a new key is appended at the
    /// end. Raw keys pass through [`Key`] normalization.
    pub fn insert<K: Into<Key>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes an entry by key, preserving the order and keys of the rest.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Appends a value under the next free integer key.
    ///
    /// The next key is one past the largest integer key present, and never
    /// less than zero. String keys do not participate.
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        let key = self.next_int_key();
        self.entries.insert(Key::Int(key), value.into());
    }

    fn next_int_key(&self) -> i64 {
        self.entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |max| (max + 1).max(0))
    }

    /// Returns the first value, or `None` on an empty collection.
    pub fn first(&self) -> Option<&Value> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Returns the last value, or `None` on an empty collection.
    pub fn last(&self) -> Option<&Value> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns true if the collection is non-empty and every key is an
    /// integer key.
    ///
    /// The scan short-circuits on the first string key. The empty collection
    /// is not integer indexed: its key type is unobservable.
    pub fn is_integer_indexed(&self) -> bool {
        !self.is_empty() && self.entries.keys().all(Key::is_int)
    }

    /// Returns true if the collection is non-empty and its first and last
    /// keys are integer keys.
    ///
    /// A cheap approximation of [`Collection::is_integer_indexed`] that does
    /// not inspect interior keys, so the two can disagree on collections
    /// with mixed interior keys. Call sites choose one deliberately; the
    /// exact scan gates reindexing decisions.
    pub fn is_boundary_integer_indexed(&self) -> bool {
        match (self.entries.first(), self.entries.last()) {
            (Some((first, _)), Some((last, _))) => first.is_int() && last.is_int(),
            _ => false,
        }
    }

    /// Returns the values stored under integer keys, renumbered from zero.
    pub fn int_values(&self) -> Collection {
        Collection::from_values(
            self.entries
                .iter()
                .filter(|(k, _)| k.is_int())
                .map(|(_, v)| v.clone()),
        )
    }

    /// Returns the string-keyed entries with their keys and order kept.
    pub fn string_entries(&self) -> Collection {
        Collection::from_pairs(
            self.entries
                .iter()
                .filter(|(k, _)| k.is_str())
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Reindexes the integer-keyed portion of the collection.
    ///
    /// Integer keys are replaced with a fresh contiguous zero-based sequence
    /// in existing order and emitted first; string-keyed entries follow in
    /// their original relative order, untouched.
    pub fn reset_int_keys(&self) -> Collection {
        let mut result = self.int_values();
        for (k, v) in self.string_entries().iter() {
            result.insert(k.clone(), v.clone());
        }
        result
    }

    /// Returns true if the keys are exactly `0..n` in order.
    pub(crate) fn is_sequential(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, k)| k.as_int() == Some(i as i64))
    }
}

/// Order-sensitive equality: both the pairs and their iteration order must
/// match.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Collection::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_sequential() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}
