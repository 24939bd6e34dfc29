//! Key-list merging.
//!
//! A "key list" is a collection that names keys: positional entries carry
//! the key name as a string value, string-keyed entries carry extra data
//! under the key name itself. Merging unites two such lists positionally
//! and by identity.

use crate::value::{Collection, Key, Value};

/// Derives a key from a key/value pair.
///
/// A string key is returned as-is; an integer key is returned only when
/// `int_key` allows it. Otherwise, a string value stands in as the key
/// candidate, taken verbatim (it is an identity to match on, not a
/// normalized collection key). Returns `None` when the pair yields no
/// usable key.
pub fn key_from_pair(key: &Key, value: &Value, int_key: bool) -> Option<Key> {
    if key.is_str() || (int_key && key.is_int()) {
        Some(key.clone())
    } else {
        value.as_str().map(|s| Key::Str(s.to_string()))
    }
}

/// Finds the first entry whose string key equals `needle` or whose value is
/// the string `needle`, and returns that entry's key.
///
/// A linear scan in iteration order; the first match wins. Absence is a
/// normal outcome, not a fault.
pub fn find_first_index_by_key(keys: &Collection, needle: &str) -> Option<Key> {
    keys.iter()
        .find(|(k, v)| k.as_str() == Some(needle) || v.as_str() == Some(needle))
        .map(|(k, _)| k.clone())
}

/// Merges a key list into a base key list and returns the new list.
///
/// The base is first united with itself to establish a canonical starting
/// point. Then each incoming pair is matched against the accumulated list
/// by needle (its string key, or failing that its string value); a pair
/// with no usable needle stops the scan entirely, signalling that the rest
/// of the incoming collection is not a key list.
///
/// On a match with `replace` set, the old entry is removed and the incoming
/// pair takes its place (under its string key when it has one, appended
/// positionally otherwise). On a match with `replace` unset the existing
/// entry is preserved and the incoming pair is dropped, never duplicated.
/// Unmatched pairs are always added.
///
/// The result is reindexed: integer keys contiguous from zero and ordered
/// before the string-keyed entries.
pub fn merge_keys(keys: &Collection, incoming: &Collection, replace: bool) -> Collection {
    if keys.is_empty() && incoming.is_empty() {
        return Collection::new();
    }

    let mut acc = unite_keys(keys, true);

    for (key, value) in incoming.iter() {
        let needle = match key_from_pair(key, value, false) {
            Some(Key::Str(needle)) => needle,
            _ => break,
        };

        let index = find_first_index_by_key(&acc, &needle);
        let matched = index.is_some();
        if let Some(index) = index {
            if replace {
                acc.remove(&index);
            }
        }

        if replace || !matched {
            match key {
                Key::Str(_) => acc.insert(key.clone(), value.clone()),
                Key::Int(_) => acc.push(value.clone()),
            }
        }
    }

    acc.reset_int_keys()
}

/// Unites a key list with itself: deduplicates by needle and canonicalizes
/// the key layout. Defined as [`merge_keys`] with an empty base.
pub fn unite_keys(keys: &Collection, rewrite: bool) -> Collection {
    merge_keys(&Collection::new(), keys, rewrite)
}
