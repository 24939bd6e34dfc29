//! Pick module - first-value lookups.
//!
//! Absence is a normal outcome: both pickers return `None` rather than
//! failing when nothing qualifies.

use crate::value::Value;

/// Returns the first non-null value, or `None`.
pub fn first_exists(values: &[Value]) -> Option<&Value> {
    values.iter().find(|v| !v.is_null())
}

/// Returns the first non-empty value (per [`Value::is_empty_value`]), or
/// `None`.
pub fn first_not_empty(values: &[Value]) -> Option<&Value> {
    values.iter().find(|v| !v.is_empty_value())
}
