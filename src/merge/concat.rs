//! In-place collection merges.

use crate::value::{Collection, Key};

/// Merges `other` into `source` key-wise, mutating `source`.
///
/// Integer keys collide like string keys here, unlike an append-merge.
/// When `replace` is true a colliding key is overwritten in place; when
/// false the source's value is kept. New keys are appended at the end in
/// `other`'s order.
pub fn concat(source: &mut Collection, other: &Collection, replace: bool) {
    for (key, value) in other.iter() {
        if replace || !source.contains_key(key) {
            source.insert(key.clone(), value.clone());
        }
    }
}

/// Joins the values of `others` onto `source`, mutating `source`.
///
/// The source's own integer keys are renumbered from zero first, with
/// string-keyed entries keeping their positions. Then, in order,
/// string-keyed values replace equal string keys and integer-keyed values
/// are appended under fresh positional keys.
pub fn push_merge(source: &mut Collection, others: &[Collection]) {
    let mut merged = renumber_int_keys(source);
    for other in others {
        for (key, value) in other.iter() {
            match key {
                Key::Str(_) => merged.insert(key.clone(), value.clone()),
                Key::Int(_) => merged.push(value.clone()),
            }
        }
    }
    *source = merged;
}

/// Renumbers integer keys from zero in place, without reordering; string
/// keys keep their positions, unlike a full reindex.
fn renumber_int_keys(coll: &Collection) -> Collection {
    let mut next = 0i64;
    coll.iter()
        .map(|(key, value)| {
            let key = match key {
                Key::Int(_) => {
                    let renumbered = Key::Int(next);
                    next += 1;
                    renumbered
                }
                Key::Str(_) => key.clone(),
            };
            (key, value.clone())
        })
        .collect()
}
