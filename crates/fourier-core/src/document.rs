//! Documents: the leaf records of the hierarchy.
//!
//! A document is a flat mapping from field name to an arbitrary JSON-shaped
//! value. The reserved field `_id` carries the document identifier and is
//! enforced at construction, so every `Document` in the system has one.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::id::DocumentId;
use crate::snowflake::construct_snowflake;

/// Reserved field name carrying the document identifier.
pub const ID_FIELD: &str = "_id";

/// A single record: named fields holding arbitrary values.
///
/// Construction enforces the `_id` invariant: a supplied `_id` is honored
/// when it is a positive integer fitting 64 bits, and replaced with a fresh
/// snowflake otherwise. Absent, null, zero, negative, fractional, and
/// non-numeric values all count as absent, so round-tripping a stored
/// document preserves its identifier while a new insert always gets one.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Build a document from raw fields, assigning `_id` when needed.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        let id = supplied_id(&fields).unwrap_or_else(construct_snowflake);
        fields.insert(ID_FIELD.to_owned(), Value::from(id.get()));
        Self { fields }
    }

    /// The document identifier.
    ///
    /// Total: construction guarantees the field is present and integral,
    /// so this never fails after `new`.
    pub fn id(&self) -> DocumentId {
        self.fields
            .get(ID_FIELD)
            .and_then(Value::as_u64)
            .map(DocumentId::new)
            .unwrap_or_default()
    }

    /// Look up a single field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Number of fields, `_id` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false once constructed: `new` guarantees `_id` is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over every field.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document, yielding its field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Document::new(fields)
    }
}

// A document serializes as its flat fields object, with no wrapper.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

// Deserialization routes through `new` so the `_id` invariant holds even
// for blobs edited outside the system.
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Document::new)
    }
}

/// A caller-supplied `_id` counts only when it is a positive integer
/// representable in 64 bits; anything else is treated as absent.
fn supplied_id(fields: &Map<String, Value>) -> Option<DocumentId> {
    match fields.get(ID_FIELD).and_then(Value::as_u64) {
        None | Some(0) => None,
        Some(raw) => Some(DocumentId::new(raw)),
    }
}
