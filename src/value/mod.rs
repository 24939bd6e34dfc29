//! Value module - the shared data model.
//!
//! Keys, scalar values, and the ordered mixed-key collection every other
//! module operates on.

mod collection;
mod convert;
mod key;
mod value;

pub use collection::*;
pub use convert::*;
pub use key::*;
pub use value::*;
