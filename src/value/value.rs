//! Scalar values and the shared emptiness predicate.

use super::collection::Collection;
use serde::ser::{Serialize, Serializer};

/// Value is a single collection entry: a scalar or a nested collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Coll(Collection),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_coll(&self) -> bool {
        matches!(self, Value::Coll(_))
    }

    /// Returns true for integer, float, string and boolean values.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Null | Value::Coll(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_coll(&self) -> Option<&Collection> {
        match self {
            Value::Coll(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_coll_mut(&mut self) -> Option<&mut Collection> {
        match self {
            Value::Coll(c) => Some(c),
            _ => None,
        }
    }

    /// The one shared emptiness predicate.
    ///
    /// Empty values are: null, `false`, `0`, `0.0`, the empty string, the
    /// string `"0"`, and the empty collection. The `"0"` case follows the
    /// generic emptiness rule of the source implementation's language.
    ///
    /// Emptiness is evaluated per value, never recursively: a collection
    /// containing only empty scalars is itself non-empty.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::String(s) => s.is_empty() || s == "0",
            Value::Coll(c) => c.is_empty(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Collection> for Value {
    fn from(c: Collection) -> Self {
        Value::Coll(c)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Coll(c) => c.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(42).is_int());
        assert!(Value::Float(3.14).is_float());
        assert!(Value::String("hello".into()).is_string());
        assert!(Value::Coll(Collection::new()).is_coll());
    }

    #[test]
    fn test_is_scalar() {
        assert!(Value::Int(1).is_scalar());
        assert!(Value::Bool(false).is_scalar());
        assert!(Value::Float(0.0).is_scalar());
        assert!(Value::String(String::new()).is_scalar());
        assert!(!Value::Null.is_scalar());
        assert!(!Value::Coll(Collection::new()).is_scalar());
    }

    #[test]
    fn test_is_empty_value() {
        assert!(Value::Null.is_empty_value());
        assert!(Value::Bool(false).is_empty_value());
        assert!(Value::Int(0).is_empty_value());
        assert!(Value::Float(0.0).is_empty_value());
        assert!(Value::String("".into()).is_empty_value());
        assert!(Value::String("0".into()).is_empty_value());
        assert!(Value::Coll(Collection::new()).is_empty_value());

        assert!(!Value::Bool(true).is_empty_value());
        assert!(!Value::Int(-1).is_empty_value());
        assert!(!Value::String(" ".into()).is_empty_value());
        assert!(!Value::String("00".into()).is_empty_value());
    }
}
