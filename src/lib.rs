//! # Array Support
//!
//! A library of pure operations over mixed-key ordered collections:
//! containers that may be sequentially indexed (lists), key indexed (maps),
//! or both at once, with insertion order preserved throughout.
//!
//! The operations give calling code precise semantics that native collection
//! primitives do not provide consistently: recursive prune-and-reindex,
//! key-list merging with a replace/preserve policy, and single-use set
//! partitioning by value.
//!
//! ## Modules
//!
//! - [`value`] - The shared data model: keys, values and the ordered collection
//! - [`prune`] - Recursive and single-level removal of empty/null entries
//! - [`merge`] - Key-list merging and in-place collection merges
//! - [`diff`] - Left/intersection/right partitioning of two value sequences
//! - [`remove`] - Removal of entries by (possibly nested) key lists
//! - [`pick`] - First-existing / first-non-empty value pickers

pub mod diff;
pub mod merge;
pub mod pick;
pub mod prune;
pub mod remove;
pub mod value;

pub use diff::{difference, intersection, left_divergence, right_divergence, Difference};
pub use merge::{
    concat, find_first_index_by_key, key_from_pair, merge_keys, push_merge, unite_keys,
};
pub use pick::{first_exists, first_not_empty};
pub use prune::{
    prune_empty, prune_null, remove_collections, remove_empty, remove_not_scalar, remove_null,
    trim,
};
pub use remove::{remove_by_keys, remove_by_keys_in_place, KeySpec};
pub use value::{from_json, from_yaml, to_json, to_yaml, Collection, ConvertError, Key, Value};
