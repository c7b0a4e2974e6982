use crate::{
    doc_store::{Document, DocumentStore},
    entities::document,
    error::StoreError,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use uuid::Uuid;

/// Document store backed by a single `documents` table. Each row is a
/// `(collection, id, json)` triple; collection paths are opaque strings.
#[derive(Clone)]
pub struct SqlDocumentStore {
    db: DatabaseConnection,
}

impl SqlDocumentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_owned()))
}

#[async_trait]
impl DocumentStore for SqlDocumentStore {
    async fn insert(&self, collection: &str, doc: serde_json::Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        let model = document::ActiveModel {
            id: Set(id),
            collection: Set(collection.to_owned()),
            doc: Set(doc),
        };
        document::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await?;

        Ok(id.to_string())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = document::Entity::find()
            .filter(document::Column::Collection.eq(collection))
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Document {
                id: row.id.to_string(),
                data: row.doc,
            })
            .collect())
    }

    async fn set_by_id(
        &self,
        collection: &str,
        id: &str,
        doc: serde_json::Value,
    ) -> Result<(), StoreError> {
        let model = document::ActiveModel {
            id: Set(parse_id(id)?),
            collection: Set(collection.to_owned()),
            doc: Set(doc),
        };
        document::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([document::Column::Collection, document::Column::Id])
                    .update_column(document::Column::Doc)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id(id)?;
        let result = document::Entity::delete_many()
            .filter(document::Column::Id.eq(uuid))
            .filter(document::Column::Collection.eq(collection))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found(collection, id));
        }

        Ok(())
    }
}
