//! The document-store collaborator contract.

use async_trait::async_trait;

/// Transport/service failure from the store backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// A document as returned by a query, with its store-assigned id.
///
/// The record id travels out-of-band; it is not a field of the document.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub record_id: String,
    pub fields: serde_json::Value,
}

/// Minimal asynchronous document service: schemaless insert and equality
/// query, no transactions, no server-side validation.
///
/// Implementations must be safe to call concurrently; a `save` and a query
/// in flight at the same time must not block one another.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into a collection, returning the assigned id.
    async fn insert(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<String, StoreError>;

    /// All documents in a collection whose `field` equals `value`.
    ///
    /// Order is store-defined; an empty result is a valid answer.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<StoredDocument>, StoreError>;
}
