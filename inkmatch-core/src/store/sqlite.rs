//! SQLite-backed document store
//!
//! One `documents` table keyed by (collection, id) with the field object as
//! JSON text. Equality queries go through `json_extract`, so no per-field
//! index exists; collections here are small enough that a scan is fine.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Row, SqlitePool};

use super::{merge_fields, normalize_object, Document, DocumentStore};
use crate::{Error, Result};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id TEXT NOT NULL,
    data TEXT NOT NULL,
    PRIMARY KEY (collection, id)
)";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a database URL and ensure the schema exists
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Open (creating if needed) a database file
    pub async fn open(path: &Path) -> Result<Self> {
        let url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&url).await
    }

    /// Fresh in-memory database, one per call
    pub async fn in_memory() -> Result<Self> {
        // Must stay on a single connection: every additional pooled
        // connection would see its own empty in-memory database.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    fn parse(id: String, data: String) -> Result<Document> {
        let fields: Value = serde_json::from_str(&data)
            .map_err(|e| Error::Internal(format!("corrupt document {id}: {e}")))?;
        Ok(Document { id, fields })
    }

    fn serialize(fields: &Value) -> Result<String> {
        serde_json::to_string(fields).map_err(|e| Error::Internal(format!("serialize: {e}")))
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::parse(id.to_string(), row.get("data"))?)),
            None => Ok(None),
        }
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ? ORDER BY id")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| Self::parse(row.get("id"), row.get("data")))
            .collect()
    }

    async fn query(&self, collection: &str, field: &str, value: &str) -> Result<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT id, data FROM documents
             WHERE collection = ? AND json_extract(data, ?) = ?
             ORDER BY id",
        )
        .bind(collection)
        .bind(format!("$.{field}"))
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Self::parse(row.get("id"), row.get("data")))
            .collect()
    }

    async fn set(&self, collection: &str, id: &str, fields: Value, merge: bool) -> Result<()> {
        let next = if merge {
            match self.get(collection, id).await? {
                Some(existing) => merge_fields(existing.fields, fields),
                None => normalize_object(fields),
            }
        } else {
            normalize_object(fields)
        };

        sqlx::query("INSERT OR REPLACE INTO documents (collection, id, data) VALUES (?, ?, ?)")
            .bind(collection)
            .bind(id)
            .bind(Self::serialize(&next)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()> {
        let existing = self
            .get(collection, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("{collection}/{id}")))?;
        let next = merge_fields(existing.fields, fields);

        sqlx::query("UPDATE documents SET data = ? WHERE collection = ? AND id = ?")
            .bind(Self::serialize(&next)?)
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let store = SqliteStore::in_memory().await.unwrap();
        store
            .set("artists", "a1", json!({"name": "Vera", "location": "Amsterdam"}), false)
            .await
            .unwrap();

        let doc = store.get("artists", "a1").await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "Vera");
        assert!(store.get("artists", "a2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_merge_preserves_unrelated_fields() {
        let store = SqliteStore::in_memory().await.unwrap();
        store
            .set("likes", "v1", json!({"likes": ["t1"], "theme": "dark"}), false)
            .await
            .unwrap();
        store
            .set("likes", "v1", json!({"likes": ["t1", "t2"]}), true)
            .await
            .unwrap();

        let doc = store.get("likes", "v1").await.unwrap().unwrap();
        assert_eq!(doc.fields["likes"], json!(["t1", "t2"]));
        assert_eq!(doc.fields["theme"], "dark");
    }

    #[tokio::test]
    async fn test_query_by_field_equality() {
        let store = SqliteStore::in_memory().await.unwrap();
        store
            .set("artists", "a1", json!({"userId": "u1", "name": "Vera"}), false)
            .await
            .unwrap();
        store
            .set("artists", "a2", json!({"userId": "u2", "name": "Joost"}), false)
            .await
            .unwrap();

        let matches = store.query("artists", "userId", "u2").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "a2");

        assert!(store.query("artists", "userId", "u3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_absent_is_not_found() {
        let store = SqliteStore::in_memory().await.unwrap();
        let err = store
            .update("tattoos", "missing", json!({"price": 10.0}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.set("tattoos", "b", json!({"n": 2}), false).await.unwrap();
        store.set("tattoos", "a", json!({"n": 1}), false).await.unwrap();

        let docs = store.list("tattoos").await.unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.set("artists", "x", json!({"name": "Vera"}), false).await.unwrap();
        assert!(store.get("tattoos", "x").await.unwrap().is_none());
        assert!(store.list("tattoos").await.unwrap().is_empty());
    }
}
