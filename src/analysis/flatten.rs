//! Recursive payload flattening.
//!
//! Turns an arbitrary nested payload into an ordered list of
//! `(path, value)` pairs covering every reachable node. Pre-order
//! traversal in the payload's own key/index order, so output is
//! deterministic for a given input.
//!
//! No cycle detection: payloads are deserialized JSON and therefore
//! acyclic. Recursion depth is bounded only by input nesting.

use serde_json::{Map, Value};

/// One reachable field of a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedField {
    /// Dotted path with bracketed sequence indices, e.g. `a.b[2].c`.
    pub path: String,
    /// The value at that path (cloned; caller data is never mutated).
    pub value: Value,
}

/// Flatten a payload into its ordered field list.
///
/// A top-level scalar or null payload has no addressable fields and
/// yields an empty list.
pub fn flatten(payload: &Value) -> Vec<FlattenedField> {
    let mut fields = Vec::new();
    match payload {
        Value::Object(map) => flatten_map(map, "", &mut fields),
        Value::Array(items) => flatten_seq(items, "", &mut fields),
        _ => {}
    }
    fields
}

fn flatten_map(map: &Map<String, Value>, prefix: &str, out: &mut Vec<FlattenedField>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        out.push(FlattenedField {
            path: path.clone(),
            value: value.clone(),
        });
        match value {
            Value::Object(inner) => flatten_map(inner, &path, out),
            Value::Array(items) => flatten_seq(items, &path, out),
            _ => {}
        }
    }
}

fn flatten_seq(items: &[Value], prefix: &str, out: &mut Vec<FlattenedField>) {
    for (index, value) in items.iter().enumerate() {
        let path = format!("{prefix}[{index}]");
        out.push(FlattenedField {
            path: path.clone(),
            value: value.clone(),
        });
        // Scalar and nested-sequence elements are leaves; only mappings
        // carry further named fields.
        if let Value::Object(inner) = value {
            flatten_map(inner, &path, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn paths(payload: &Value) -> Vec<String> {
        flatten(payload).into_iter().map(|f| f.path).collect()
    }

    #[test]
    fn nested_mapping_paths() {
        let payload = json!({"a": {"b": {"c": 1}}, "d": 2});
        assert_eq!(paths(&payload), vec!["a", "a.b", "a.b.c", "d"]);
    }

    #[test]
    fn container_entries_contribute_themselves_and_children() {
        let payload = json!({"a": {"b": 1}});
        let fields = flatten(&payload);
        assert_eq!(fields[0].path, "a");
        assert_eq!(fields[0].value, json!({"b": 1}));
        assert_eq!(fields[1].path, "a.b");
        assert_eq!(fields[1].value, json!(1));
    }

    #[test]
    fn sequence_elements_get_bracketed_indices() {
        let payload = json!({"a": {"b": [10, 20, {"c": 30}]}});
        assert_eq!(
            paths(&payload),
            vec!["a", "a.b", "a.b[0]", "a.b[1]", "a.b[2]", "a.b[2].c"]
        );
    }

    #[test]
    fn scalar_sequence_elements_are_leaves() {
        let payload = json!({"tags": ["x", ["nested"]]});
        // the nested array element is recorded but not expanded
        assert_eq!(paths(&payload), vec!["tags", "tags[0]", "tags[1]"]);
    }

    #[test]
    fn top_level_sequence() {
        let payload = json!([{"a": 1}, 2]);
        assert_eq!(paths(&payload), vec!["[0]", "[0].a", "[1]"]);
    }

    #[test]
    fn top_level_scalar_and_null_are_empty() {
        assert!(flatten(&json!("hello")).is_empty());
        assert!(flatten(&json!(42)).is_empty());
        assert!(flatten(&Value::Null).is_empty());
    }

    #[test]
    fn preserves_key_order() {
        let payload: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(paths(&payload), vec!["z", "a", "m"]);
    }
}
