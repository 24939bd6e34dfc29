//! Collection keys and key normalization.

use super::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key is a normalized collection key: either an integer or a string.
///
/// All key coercion in the crate goes through [`Key::normalize`] (or the
/// `From` conversions, which apply the same rule), so the classification of
/// a raw key is decided in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns true if this is an integer key.
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a string key.
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// Returns the integer value if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Normalizes a raw scalar value into a key.
    ///
    /// The coercion rules, applied consistently everywhere a key is read:
    ///
    /// - integers stay integer keys;
    /// - floats truncate toward zero to integer keys;
    /// - `true` and `false` become `1` and `0`;
    /// - null becomes the empty string key;
    /// - a string that is a canonical decimal integer (see
    ///   [`canonical_int`]) becomes an integer key, any other string stays a
    ///   string key.
    ///
    /// A nested collection is not usable as a key and yields `None`.
    pub fn normalize(raw: &Value) -> Option<Key> {
        match raw {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Int(i) => Some(Key::Int(*i)),
            Value::Float(f) => Some(Key::Int(*f as i64)),
            Value::String(s) => Some(Key::from(s.as_str())),
            Value::Coll(_) => None,
        }
    }
}

/// Parses a string that is a canonical decimal integer.
///
/// Canonical means: `"0"`, or an optional `-` followed by a nonzero leading
/// digit, with the result in `i64` range. Strings like `"05"`, `"+3"`,
/// `"-0"` or `"1.0"` are not canonical and stay string keys.
pub fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_int(s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_int(&s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}
