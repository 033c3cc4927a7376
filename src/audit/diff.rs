use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name used when a snapshot is not a JSON object.
pub const SCALAR_FIELD: &str = "value";

/// One changed field of an entity.
///
/// `old` is `None` when the field did not exist before (creation), `new` is
/// `None` when it no longer exists (deletion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old: Option<Value>,
    pub new: Option<Value>,
}

/// Top-level field diff of two entity snapshots, sorted by field name.
///
/// Nested objects and arrays are compared as whole values. A `null` snapshot
/// has no fields; any other non-object snapshot is a single field named
/// [`SCALAR_FIELD`].
pub fn diff(old: &Value, new: &Value) -> Vec<FieldChange> {
    diff_fields(&fields(old), &fields(new))
}

pub(crate) fn fields(snapshot: &Value) -> BTreeMap<&str, &Value> {
    match snapshot {
        Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        Value::Null => BTreeMap::new(),
        other => BTreeMap::from([(SCALAR_FIELD, other)]),
    }
}

pub(crate) fn diff_fields(
    old: &BTreeMap<&str, &Value>,
    new: &BTreeMap<&str, &Value>,
) -> Vec<FieldChange> {
    let mut names: Vec<&str> = old.keys().chain(new.keys()).copied().collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .filter_map(|name| {
            let before = old.get(name).copied();
            let after = new.get(name).copied();
            (before != after).then(|| FieldChange {
                field: name.to_string(),
                old: before.cloned(),
                new: after.cloned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn changed_added_removed() {
        let old = json!({"name": "Anna", "phone": "123", "notes": "x"});
        let new = json!({"name": "Anna", "phone": "456", "email": "a@b.c"});
        let changes = diff(&old, &new);
        assert_eq!(
            changes,
            vec![
                FieldChange {
                    field: "email".into(),
                    old: None,
                    new: Some(json!("a@b.c")),
                },
                FieldChange {
                    field: "notes".into(),
                    old: Some(json!("x")),
                    new: None,
                },
                FieldChange {
                    field: "phone".into(),
                    old: Some(json!("123")),
                    new: Some(json!("456")),
                },
            ]
        );
    }

    #[test]
    fn identical_snapshots_have_no_changes() {
        let v = json!({"a": 1, "b": {"c": [1, 2]}});
        assert!(diff(&v, &v.clone()).is_empty());
    }

    #[test]
    fn nested_compared_as_whole() {
        let changes = diff(&json!({"addr": {"city": "A"}}), &json!({"addr": {"city": "B"}}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "addr");
        assert_eq!(changes[0].new, Some(json!({"city": "B"})));
    }

    #[test]
    fn null_field_differs_from_missing() {
        let changes = diff(&json!({}), &json!({"a": null}));
        assert_eq!(changes[0].old, None);
        assert_eq!(changes[0].new, Some(Value::Null));
    }

    #[test]
    fn scalar_snapshot() {
        let changes = diff(&json!(1), &json!(2));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, SCALAR_FIELD);
        assert!(diff(&Value::Null, &Value::Null).is_empty());
    }
}
