use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;

/// A stored document: the store-assigned id plus the JSON payload. The id is
/// never duplicated inside the payload; callers that need it on the wire
/// inject it when they deserialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// The opaque document store the sync layer persists through. Collections are
/// named by string path (nested collections use `/`-joined paths, e.g.
/// `semesters/{id}/courses`). No operation spans more than one document, so
/// there is no transactional guarantee across calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document under a fresh store-assigned id and returns the id.
    async fn insert(&self, collection: &str, doc: Value) -> Result<String, StoreError>;

    /// Returns every document in a collection. Ordering is backend-defined;
    /// an unknown collection is an empty collection.
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Writes a document under a caller-chosen id, overwriting any existing
    /// document with that id (upsert).
    async fn set_by_id(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError>;

    /// Deletes a document by id. Fails with [`StoreError::NotFound`] when no
    /// such document exists.
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
