//! Merge module - key-list merging and in-place collection merges.

mod concat;
mod keys;

#[cfg(test)]
mod merge_test;

pub use concat::*;
pub use keys::*;
