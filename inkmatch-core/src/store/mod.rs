//! Document store abstraction
//!
//! Collections of JSON documents with get/list/query/set/update/delete
//! primitives, modeled after the hosted document database the gallery was
//! designed against. Two backends: in-memory (tests, ephemeral dev runs)
//! and SQLite.
//!
//! Consistency: `set` with `merge` preserves unrelated top-level fields, but
//! no primitive wraps a caller's read-modify-write cycle in a transaction.
//! Concurrent writers to the same document resolve last-writer-wins.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::{Error, Result};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Collection of artist profiles
pub const ARTISTS: &str = "artists";
/// Collection of tattoo records
pub const TATTOOS: &str = "tattoos";
/// Collection of per-viewer like documents, keyed by viewer id
pub const LIKES: &str = "likes";

/// One stored document: opaque id plus a JSON object of fields
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

/// Abstract document store collaborator
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document; `None` when absent
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Whole-collection scan
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;

    /// Equality query on one top-level string field
    async fn query(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Document>>;

    /// Create or overwrite a document. With `merge`, existing top-level
    /// fields not named in `fields` are preserved.
    async fn set(&self, collection: &str, id: &str, fields: Value, merge: bool) -> Result<()>;

    /// Merge `fields` into an existing document; fails with `NotFound` when
    /// the document is absent.
    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()>;

    /// Remove a document; removing an absent document is not an error
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Generate an id for a new document
pub fn new_doc_id() -> String {
    Uuid::new_v4().to_string()
}

/// Decode a document into a typed record, injecting the document id
pub fn decode<T: DeserializeOwned>(doc: Document) -> Result<T> {
    let Document { id, mut fields } = doc;
    if let Value::Object(map) = &mut fields {
        map.insert("id".to_string(), Value::String(id));
    }
    serde_json::from_value(fields).map_err(|e| Error::Internal(format!("malformed document: {e}")))
}

/// Decode a batch of documents, skipping malformed entries with a warning
pub fn decode_all<T: DeserializeOwned>(docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match decode(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping document {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

/// Serialize a record into a document field object
pub fn encode<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| Error::Internal(format!("encode: {e}")))
}

/// Top-level field merge: `incoming` entries replace same-named entries of
/// `existing`; everything else in `existing` is preserved
pub(crate) fn merge_fields(existing: Value, incoming: Value) -> Value {
    match (existing, incoming) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, incoming) => normalize_object(incoming),
    }
}

/// Documents are always JSON objects; anything else becomes an empty object
pub(crate) fn normalize_object(value: Value) -> Value {
    match value {
        Value::Object(_) => value,
        _ => Value::Object(Map::new()),
    }
}
