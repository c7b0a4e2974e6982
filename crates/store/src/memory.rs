use crate::{
    doc_store::{Document, DocumentStore},
    error::StoreError,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory document store. Preserves insertion order within each
/// collection; used by tests and anywhere a throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, doc: serde_json::Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .push(Document {
                id: id.clone(),
                data: doc,
            });

        Ok(id)
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn set_by_id(
        &self,
        collection: &str,
        id: &str,
        doc: serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_owned()).or_default();

        match docs.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => existing.data = doc,
            None => docs.push(Document {
                id: id.to_owned(),
                data: doc,
            }),
        }

        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        if docs.len() == before {
            return Err(StoreError::not_found(collection, id));
        }

        Ok(())
    }
}
