//! Prune module - removal of entries by value.
//!
//! The recursive pruners walk nested collections depth-first and can
//! renumber integer keys as they go; the single-level filters are flat
//! passes that leave keys alone.

mod filter;
mod recursive;


pub use filter::*;
pub use recursive::*;
