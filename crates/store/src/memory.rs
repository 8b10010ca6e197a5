//! In-process document store.
//!
//! Backs tests and local development. Record ids are uuid-v4; query order
//! is insertion order, which callers must treat as store-defined.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::{DocumentStore, StoreError, StoredDocument};

/// HashMap-of-collections store behind an async `RwLock`.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Returns `true` if a collection holds no documents.
    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }

    /// Insert a document with a caller-chosen id, bypassing id assignment.
    /// Lets tests seed malformed or legacy documents.
    pub async fn seed(&self, collection: &str, record_id: &str, fields: serde_json::Value) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                record_id: record_id.to_string(),
                fields,
            });
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<String, StoreError> {
        let record_id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                record_id: record_id.clone(),
                fields: document,
            });
        Ok(record_id)
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| d.fields.get(field).and_then(|v| v.as_str()) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }
}
