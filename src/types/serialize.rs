//! Boundary serialization.
//!
//! Every record leaving the service goes through [`serialize_doc`]: store-native ids become
//! their canonical string form and the identity field `_id` is exposed as `id`.
//! Only top-level fields are converted; records here are flat.

use serde_json::{Map, Value as JsonValue};
use crate::types::{Document, Value, ID_FIELD};

/// Public name of the identity field
pub const EXTERNAL_ID_FIELD: &str = "id";

fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::from(*n),
        Value::Id(id) => JsonValue::String(id.to_string()),
        Value::String(s) => JsonValue::String(s.clone()),
    }
}

/// External representation of one record. An empty record maps to an empty object.
pub fn serialize_doc(doc: &Document) -> Map<String, JsonValue> {
    let mut out = Map::new();
    let mut identity = None;

    for (field, value) in doc.iter() {
        match value {
            Value::Id(id) if field == ID_FIELD => identity = Some(id.to_string()),
            _ => {
                out.insert(field.clone(), to_json(value));
            }
        }
    }

    // The store identity wins over any stored field that happens to be called `id`.
    if let Some(id) = identity {
        out.insert(EXTERNAL_ID_FIELD.to_string(), JsonValue::String(id));
    }
    out
}

/// Absent input stays absent
pub fn serialize_opt(doc: Option<&Document>) -> Option<Map<String, JsonValue>> {
    doc.map(serialize_doc)
}

/// Serialize a result set, preserving order
pub fn serialize_all<I>(docs: I) -> Vec<JsonValue>
where
    I: IntoIterator<Item = Document>,
{
    docs.into_iter()
        .map(|doc| JsonValue::Object(serialize_doc(&doc)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocId;
    use serde_json::json;

    #[test]
    fn identity_is_renamed_and_stringified() {
        let id = DocId::random();
        let doc = Document::new().with(ID_FIELD, id).with("title", "Economics");

        let out = serialize_doc(&doc);
        assert_eq!(out.get("id"), Some(&json!(id.to_string())));
        assert!(!out.contains_key("_id"));
        assert_eq!(out.get("title"), Some(&json!("Economics")));
    }

    #[test]
    fn other_identifier_fields_become_strings() {
        let parent = DocId::random();
        let doc = Document::new().with("subject_id", parent).with("number", 4i64);

        let out = serialize_doc(&doc);
        assert_eq!(out.get("subject_id"), Some(&json!(parent.to_string())));
        assert_eq!(out.get("number"), Some(&json!(4)));
    }

    #[test]
    fn non_identifier_identity_field_is_left_alone() {
        let doc = Document::new().with(ID_FIELD, "legacy");
        let out = serialize_doc(&doc);
        assert_eq!(out.get("_id"), Some(&json!("legacy")));
        assert!(!out.contains_key("id"));
    }

    #[test]
    fn identity_overrides_stored_id_field() {
        let id = DocId::random();
        let doc = Document::new().with(ID_FIELD, id).with("id", "stale");
        assert_eq!(serialize_doc(&doc).get("id"), Some(&json!(id.to_string())));
    }

    #[test]
    fn empty_and_absent_records_pass_through() {
        assert!(serialize_doc(&Document::new()).is_empty());
        assert_eq!(serialize_opt(None), None);
    }

    #[test]
    fn nulls_are_preserved() {
        let doc = Document::new().with("description", Value::Null);
        assert_eq!(serialize_doc(&doc).get("description"), Some(&JsonValue::Null));
    }

    #[test]
    fn created_identity_matches_across_find_and_find_one() {
        use crate::storage::{DocumentStore, MemoryStore};
        use crate::types::Filter;

        let store = MemoryStore::new("test");
        let id = store.create("subject", Document::new().with("title", "Economics")).unwrap();

        let listed = serialize_all(store.find("subject", &Filter::all(), None).unwrap());
        let single = serialize_opt(store.find_one("subject", &Filter::all().eq(ID_FIELD, id)).unwrap().as_ref());

        assert_eq!(listed[0]["id"], json!(id.to_string()));
        assert_eq!(single.unwrap().get("id"), Some(&json!(id.to_string())));
    }
}
