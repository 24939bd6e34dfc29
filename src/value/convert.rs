//! JSON and YAML interop.

use super::collection::Collection;
use super::key::Key;
use super::value::Value;
use thiserror::Error;

/// ConvertError represents a failure to convert an external document into
/// the collection data model.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A map key in the document cannot be normalized to an integer or
    /// string key (for example a YAML sequence used as a key).
    #[error("unsupported map key: {kind}")]
    UnsupportedKey { kind: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Parses a value from JSON.
///
/// Objects become collections with normalized keys, so a numeric-string
/// object key like `"5"` comes back as the integer key `5`. Arrays become
/// sequentially indexed collections.
pub fn from_json(json: &str) -> Result<Value, ConvertError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Serializes a value to JSON.
///
/// A collection whose keys are exactly `0..n` serializes as an array,
/// anything else as an object.
pub fn to_json(value: &Value) -> Result<String, ConvertError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses a value from YAML.
///
/// YAML scalar map keys pass through [`Key::normalize`]; a sequence or map
/// used as a key is rejected with [`ConvertError::UnsupportedKey`].
pub fn from_yaml(yaml: &str) -> Result<Value, ConvertError> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    yaml_to_value(parsed)
}

/// Serializes a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String, ConvertError> {
    Ok(serde_yaml::to_string(value)?)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Coll(Collection::from_values(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(fields) => {
                let mut coll = Collection::new();
                for (k, v) in fields {
                    coll.insert(Key::from(k), Value::from(v));
                }
                Value::Coll(coll)
            }
        }
    }
}

fn yaml_to_value(yaml: serde_yaml::Value) -> Result<Value, ConvertError> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or_default())
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            let mut coll = Collection::new();
            for item in items {
                coll.push(yaml_to_value(item)?);
            }
            Value::Coll(coll)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut coll = Collection::new();
            for (k, v) in mapping {
                coll.insert(yaml_key(k)?, yaml_to_value(v)?);
            }
            Value::Coll(coll)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value)?,
    })
}

fn yaml_key(yaml: serde_yaml::Value) -> Result<Key, ConvertError> {
    let kind = match &yaml {
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
        _ => {
            let scalar = yaml_to_value(yaml)?;
            // Scalars always normalize; only collections yield None.
            return Key::normalize(&scalar)
                .ok_or(ConvertError::UnsupportedKey { kind: "collection" });
        }
    };
    Err(ConvertError::UnsupportedKey { kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_array_roundtrip() {
        let value = from_json(r#"[1, -2.5, "x", true, null]"#).unwrap();
        let expected = Value::Coll(Collection::from_values([
            Value::Int(1),
            Value::Float(-2.5),
            Value::String("x".into()),
            Value::Bool(true),
            Value::Null,
        ]));
        assert_eq!(value, expected);
        assert_eq!(to_json(&value).unwrap(), r#"[1,-2.5,"x",true,null]"#);
    }

    #[test]
    fn test_json_object_keys_normalize() {
        let value = from_json(r#"{"5": "a", "05": "b", "name": "c"}"#).unwrap();
        let expected = Value::Coll(Collection::from_pairs([
            (Key::Int(5), Value::String("a".into())),
            (Key::Str("05".into()), Value::String("b".into())),
            (Key::Str("name".into()), Value::String("c".into())),
        ]));
        assert_eq!(value, expected);
    }

    #[test]
    fn test_mixed_collection_serializes_as_object() {
        let coll = Collection::from_pairs([
            (Key::Int(0), Value::Int(1)),
            (Key::Str("a".into()), Value::Int(2)),
        ]);
        assert_eq!(to_json(&Value::Coll(coll)).unwrap(), r#"{"0":1,"a":2}"#);
    }

    #[test]
    fn test_yaml_scalar_keys_normalize() {
        // The boolean key `true` coerces to the integer key 1 and overwrites
        // the entry parsed from `1: a` in place.
        let value = from_yaml("1: a\ntrue: b\nname: c\n").unwrap();
        let expected = Value::Coll(Collection::from_pairs([
            (Key::Int(1), Value::String("b".into())),
            (Key::Str("name".into()), Value::String("c".into())),
        ]));
        assert_eq!(value, expected);
    }

    #[test]
    fn test_yaml_sequence_key_rejected() {
        let err = from_yaml("[1, 2]: a\n").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedKey { .. }));
    }

    #[test]
    fn test_empty_collection_serializes_as_array() {
        assert_eq!(to_json(&Value::Coll(Collection::new())).unwrap(), "[]");
    }
}
