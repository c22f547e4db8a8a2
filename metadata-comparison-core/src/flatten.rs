//! Flattening of nested JSON objects into dot-joined key paths.
//!
//! Nested objects are walked recursively and their keys joined with
//! [`SEPARATOR`]. Arrays and scalars are leaves and are kept whole at their
//! path; arrays are never expanded into indexed keys. An empty nested object
//! contributes no key at all. Two values that join to the same key are
//! rejected rather than one silently replacing the other.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::DuplicateKeyError;

/// Separator placed between nested object keys.
pub const SEPARATOR: &str = ".";

/// Flat key-value view of a document, keyed by dot-joined path.
pub type FlatRecord = BTreeMap<String, Value>;

/// Flatten a JSON value.
///
/// A non-object value has no key path of its own and flattens to an empty
/// record.
pub fn flatten(value: &Value) -> Result<FlatRecord, DuplicateKeyError> {
    let mut record = FlatRecord::new();
    if let Value::Object(map) = value {
        flatten_into(map, None, &mut record)?;
    }
    Ok(record)
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: Option<&str>,
    record: &mut FlatRecord,
) -> Result<(), DuplicateKeyError> {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{SEPARATOR}{key}"),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => flatten_into(nested, Some(&path), record)?,
            leaf => {
                if record.contains_key(&path) {
                    return Err(DuplicateKeyError { key: path });
                }
                record.insert(path, leaf.clone());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_keys_are_dot_joined() {
        let doc = json!({
            "version": "1.0",
            "stageA": {"overallRuntimeSeconds": 3.2, "inner": {"x": 1}},
        });
        let record = flatten(&doc).unwrap();

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["stageA.inner.x", "stageA.overallRuntimeSeconds", "version"]
        );
        assert_eq!(record["stageA.overallRuntimeSeconds"], json!(3.2));
    }

    #[test]
    fn test_arrays_are_leaves() {
        let doc = json!({"jobs": [{"a": 1}, {"a": 2}], "meta": {"tags": []}});
        let record = flatten(&doc).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record["jobs"], json!([{"a": 1}, {"a": 2}]));
        assert_eq!(record["meta.tags"], json!([]));
    }

    #[test]
    fn test_empty_nested_object_has_no_key() {
        let doc = json!({"version": "1", "empty": {}});
        let record = flatten(&doc).unwrap();

        assert_eq!(record.len(), 1);
        assert!(!record.contains_key("empty"));
    }

    #[test]
    fn test_null_values_are_kept() {
        let record = flatten(&json!({"a": {"b": null}})).unwrap();
        assert_eq!(record["a.b"], Value::Null);
    }

    #[test]
    fn test_non_object_flattens_to_empty() {
        assert!(flatten(&json!([1, 2])).unwrap().is_empty());
        assert!(flatten(&json!(42)).unwrap().is_empty());
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let doc = json!({"b": {"c": 1, "a": 2}, "a": true});
        assert_eq!(flatten(&doc).unwrap(), flatten(&doc).unwrap());
    }

    #[test]
    fn test_colliding_paths_rejected() {
        let doc = json!({
            "a.overallRuntimeSeconds": 1,
            "a": {"overallRuntimeSeconds": 2},
        });
        let err = flatten(&doc).unwrap_err();
        assert_eq!(err.key, "a.overallRuntimeSeconds");
    }

    #[test]
    fn test_dotted_key_without_collision() {
        let doc = json!({"a.b": 1, "a": {"c": 2}});
        let record = flatten(&doc).unwrap();
        assert_eq!(record["a.b"], json!(1));
        assert_eq!(record["a.c"], json!(2));
    }
}
