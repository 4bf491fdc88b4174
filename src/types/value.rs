//! Store-native field values.
//!
//! Records are schemaless maps of field name to [`Value`]. Identifiers keep their own
//! variant inside the store so the boundary layer can tell them apart from ordinary strings.

use serde::{Deserialize, Serialize};
use crate::types::DocId;

/// A single field value as held by the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / explicit null
    Null,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Store-native identifier, persisted as `{"$oid": "..."}`
    Id(#[serde(with = "object_id")] DocId),
    /// UTF-8 text
    String(String),
}

impl Value {
    /// Borrow the text if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Identifier payload, if any
    pub fn as_id(&self) -> Option<DocId> {
        match self {
            Value::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// True for [`Value::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
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

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DocId> for Value {
    fn from(id: DocId) -> Self {
        Value::Id(id)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Extended-JSON encoding for identifiers: `{"$oid": "<id>"}`
mod object_id {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::types::DocId;

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Oid {
        #[serde(rename = "$oid")]
        oid: DocId,
    }

    pub fn serialize<S: Serializer>(id: &DocId, serializer: S) -> Result<S::Ok, S::Error> {
        Oid { oid: *id }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DocId, D::Error> {
        Ok(Oid::deserialize(deserializer)?.oid)
    }
}
