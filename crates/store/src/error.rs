use thiserror::Error;

/// Errors from the document store and the typed services built on it
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("document {id} not found in collection {collection}")]
    NotFound { collection: String, id: String },

    #[error("malformed document id: {0}")]
    InvalidId(String),

    #[error("course has no id; it must exist in the course catalog first")]
    MissingCourseId,

    #[error("failed to encode or decode document: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_owned(),
            id: id.to_owned(),
        }
    }
}
