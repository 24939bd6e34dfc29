//! Tests for key-list merging and the in-place merges.

use super::*;
use crate::value::{Collection, Key, Value};
use pretty_assertions::assert_eq;

fn v<T: Into<Value>>(x: T) -> Value {
    x.into()
}

fn k<K: Into<Key>>(x: K) -> Key {
    x.into()
}

#[test]
fn test_concat_appends_new_integer_keys() {
    let mut source = Collection::new();
    for i in 0..20i64 {
        source.insert(i, i * 10);
    }
    let mut other = Collection::new();
    for i in 20..30i64 {
        other.insert(i, i + 10);
    }

    let mut expected = Collection::new();
    for i in 0..20i64 {
        expected.insert(i, i * 10);
    }
    for i in 20..30i64 {
        expected.insert(i, i + 10);
    }

    concat(&mut source, &other, true);
    assert_eq!(source, expected);
}

#[test]
fn test_concat_replaces_string_keys_in_place() {
    let mut source = Collection::new();
    for i in 0..20i64 {
        source.insert(format!("a{i}"), i * 10);
    }
    let mut other = Collection::new();
    for i in 10..20i64 {
        other.insert(format!("a{i}"), i + 10);
    }

    concat(&mut source, &other, true);

    assert_eq!(source.len(), 20);
    // Replaced values, original positions.
    let keys: Vec<_> = source.keys().cloned().collect();
    assert_eq!(keys[10], k("a10"));
    assert_eq!(source.get(&k("a10")), Some(&v(20i64)));
    assert_eq!(source.get(&k("a9")), Some(&v(90i64)));
}

#[test]
fn test_concat_preserve_keeps_source_values() {
    let mut source = Collection::from_pairs([("a", 1i64), ("b", 2)]);
    let other = Collection::from_pairs([("a", 10i64), ("c", 3)]);

    concat(&mut source, &other, false);

    let expected = Collection::from_pairs([("a", 1i64), ("b", 2), ("c", 3)]);
    assert_eq!(source, expected);
}

#[test]
fn test_push_merge_renumbers_integer_keys() {
    let mut source = Collection::from_values([1i64, 2, 3]);
    let others = vec![
        Collection::from_pairs([(k(5i64), v(4i64)), (k(9i64), v(5i64))]),
        Collection::from_values([6i64]),
    ];

    push_merge(&mut source, &others);

    let expected = Collection::from_values([1i64, 2, 3, 4, 5, 6]);
    assert_eq!(source, expected);
}

#[test]
fn test_push_merge_renumbers_source_integer_keys() {
    // The source's own non-contiguous integer keys are renumbered from
    // zero before the others are joined; string keys stay where they are.
    let mut source = Collection::from_pairs([
        (k(2i64), v(1i64)),
        (k(3i64), v(2i64)),
        (k("key"), v(3i64)),
    ]);
    let others = vec![Collection::from_values([4i64, 5])];

    push_merge(&mut source, &others);

    let expected = Collection::from_pairs([
        (k(0i64), v(1i64)),
        (k(1i64), v(2i64)),
        (k("key"), v(3i64)),
        (k(2i64), v(4i64)),
        (k(3i64), v(5i64)),
    ]);
    assert_eq!(source, expected);
}

#[test]
fn test_push_merge_replaces_string_keys() {
    let mut source = Collection::from_pairs([(k(0i64), v(1i64)), (k("name"), v("old"))]);
    let others = vec![Collection::from_pairs([
        (k("name"), v("new")),
        (k(0i64), v(7i64)),
    ])];

    push_merge(&mut source, &others);

    let expected = Collection::from_pairs([
        (k(0i64), v(1i64)),
        (k("name"), v("new")),
        (k(1i64), v(7i64)),
    ]);
    assert_eq!(source, expected);
}

#[test]
fn test_key_from_pair() {
    assert_eq!(
        key_from_pair(&k("title"), &v(1i64), false),
        Some(k("title"))
    );
    assert_eq!(key_from_pair(&k(0i64), &v("id"), false), Some(Key::Str("id".into())));
    assert_eq!(key_from_pair(&k(0i64), &v("id"), true), Some(k(0i64)));
    assert_eq!(key_from_pair(&k(0i64), &v(1i64), false), None);
    assert_eq!(key_from_pair(&k(0i64), &Value::Null, false), None);
}

#[test]
fn test_key_from_pair_value_candidate_is_verbatim() {
    // A value-derived candidate is an identity to match on, so a numeric
    // string stays a string instead of coercing to an integer key.
    assert_eq!(
        key_from_pair(&k(0i64), &v("5"), false),
        Some(Key::Str("5".into()))
    );
}

#[test]
fn test_find_first_index_by_key() {
    let keys = Collection::from_pairs([(k(0i64), v("id")), (k("title"), v("Title"))]);

    assert_eq!(find_first_index_by_key(&keys, "id"), Some(k(0i64)));
    assert_eq!(find_first_index_by_key(&keys, "title"), Some(k("title")));
    assert_eq!(find_first_index_by_key(&keys, "Title"), Some(k("title")));
    assert_eq!(find_first_index_by_key(&keys, "missing"), None);
}

#[test]
fn test_find_first_index_first_match_wins() {
    let keys = Collection::from_pairs([(k(0i64), v("x")), (k("x"), v(1i64))]);
    assert_eq!(find_first_index_by_key(&keys, "x"), Some(k(0i64)));
}

#[test]
fn test_merge_keys_both_empty() {
    assert_eq!(
        merge_keys(&Collection::new(), &Collection::new(), true),
        Collection::new()
    );
}

#[test]
fn test_unite_keys_deduplicates_positional_entries() {
    let keys = Collection::from_values(["id", "name", "id"]);

    // With rewrite the duplicate replaces the earlier entry and moves to
    // the end; without it the first occurrence is kept.
    assert_eq!(
        unite_keys(&keys, true),
        Collection::from_values(["name", "id"])
    );
    assert_eq!(
        unite_keys(&keys, false),
        Collection::from_values(["id", "name"])
    );
}

#[test]
fn test_merge_keys_string_key_replaces_positional_entry() {
    let base = Collection::from_values(["id", "title"]);
    let incoming = Collection::from_pairs([(k("title"), v("Title"))]);

    let replaced = merge_keys(&base, &incoming, true);
    let expected = Collection::from_pairs([(k(0i64), v("id")), (k("title"), v("Title"))]);
    assert_eq!(replaced, expected);

    let preserved = merge_keys(&base, &incoming, false);
    assert_eq!(preserved, Collection::from_values(["id", "title"]));
}

#[test]
fn test_merge_keys_unmatched_entries_are_added() {
    let base = Collection::from_values(["id"]);
    let incoming = Collection::from_pairs([(k(0i64), v("name")), (k("title"), v("Title"))]);

    let merged = merge_keys(&base, &incoming, true);
    let expected = Collection::from_pairs([
        (k(0i64), v("id")),
        (k(1i64), v("name")),
        (k("title"), v("Title")),
    ]);
    assert_eq!(merged, expected);
}

#[test]
fn test_merge_keys_stops_at_first_unusable_pair() {
    // An integer-keyed pair with a non-string value ends the scan: the
    // rest of the incoming collection is not a key list.
    let base = Collection::from_values(["a"]);
    let incoming = Collection::from_values([v(5i64), v("b")]);

    let merged = merge_keys(&base, &incoming, true);
    assert_eq!(merged, Collection::from_values(["a"]));
}

#[test]
fn test_merge_keys_reindexes_result() {
    let base = Collection::from_pairs([(k(7i64), v("id")), (k("extra"), v(1i64))]);
    let incoming = Collection::from_values(["name"]);

    let merged = merge_keys(&base, &incoming, true);
    let expected = Collection::from_pairs([
        (k(0i64), v("id")),
        (k(1i64), v("name")),
        (k("extra"), v(1i64)),
    ]);
    assert_eq!(merged, expected);
}

#[test]
fn test_unite_keys_is_idempotent_with_rewrite() {
    let incoming = Collection::from_pairs([
        (k(0i64), v("id")),
        (k("title"), v("Title")),
        (k(1i64), v("name")),
    ]);

    let once = unite_keys(&incoming, true);
    let twice = unite_keys(&once, true);
    assert_eq!(once, twice);

    let expected = Collection::from_pairs([
        (k(0i64), v("id")),
        (k(1i64), v("name")),
        (k("title"), v("Title")),
    ]);
    assert_eq!(once, expected);
}

#[test]
fn test_merge_keys_needle_follows_key_from_pair() {
    // The needle for a positional pair is its string value taken verbatim,
    // exactly as key_from_pair derives it: the numeric string "5" matches
    // by value and never coerces into the integer key 5.
    let base = Collection::from_pairs([(k(5i64), v("x")), (k(6i64), v("5"))]);
    let incoming = Collection::from_values(["5"]);

    let merged = merge_keys(&base, &incoming, true);
    assert_eq!(merged, Collection::from_values(["x", "5"]));
}

#[test]
fn test_merge_keys_positional_duplicate_with_replace_moves_to_end() {
    let base = Collection::from_pairs([(k("x"), v("y"))]);
    let incoming = Collection::from_values(["x"]);

    // The needle "x" matches the base's string key; with replace the entry
    // is removed and the incoming value re-enters positionally.
    let merged = merge_keys(&base, &incoming, true);
    assert_eq!(merged, Collection::from_values(["x"]));
}
