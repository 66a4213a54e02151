//! In-memory document store
//!
//! Backs unit tests and `--ephemeral` dev runs. The lock is held only for
//! the duration of each map operation, never across an await point.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::{merge_fields, normalize_object, Document, DocumentStore};
use crate::{Error, Result};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, fields)| {
                        fields.get(field).and_then(Value::as_str) == Some(value)
                    })
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn set(&self, collection: &str, id: &str, fields: Value, merge: bool) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let docs = collections.entry(collection.to_string()).or_default();
        let next = if merge {
            match docs.remove(id) {
                Some(existing) => merge_fields(existing, fields),
                None => normalize_object(fields),
            }
        } else {
            normalize_object(fields)
        };
        docs.insert(id.to_string(), next);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.remove(id) {
            Some(existing) => {
                docs.insert(id.to_string(), merge_fields(existing, fields));
                Ok(())
            }
            None => Err(Error::NotFound(format!("{collection}/{id}"))),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
