use crate::{doc_store::DocumentStore, error::StoreError};
use models::Course;
use std::sync::Arc;

/// Collection holding the global course catalog
pub const COURSES_COLLECTION: &str = "courses";

/// Typed access to the global course collection. Catalog records are
/// immutable once written; the only mutation path is insertion during an
/// import.
#[derive(Clone)]
pub struct CourseService {
    store: Arc<dyn DocumentStore>,
}

impl CourseService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Inserts a course and returns its store-assigned id.
    ///
    /// There is no uniqueness check on `(subject, catalogNbr)`: re-importing
    /// the same subject and term creates duplicate catalog records.
    pub async fn add_course(&self, course: &Course) -> Result<String, StoreError> {
        let mut doc = serde_json::to_value(course)?;
        if let Some(fields) = doc.as_object_mut() {
            // the id lives on the document row, never inside the payload
            fields.remove("id");
        }

        self.store.insert(COURSES_COLLECTION, doc).await
    }

    /// Full scan of the catalog, each course carrying its store id.
    pub async fn list_all(&self) -> Result<Vec<Course>, StoreError> {
        let docs = self.store.list_all(COURSES_COLLECTION).await?;
        docs.into_iter()
            .map(|doc| {
                let mut course: Course = serde_json::from_value(doc.data)?;
                course.id = Some(doc.id);
                Ok(course)
            })
            .collect()
    }
}
