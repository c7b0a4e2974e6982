use crate::{doc_store::DocumentStore, error::StoreError};
use models::{Course, Semester, SemesterCourseEntry, sem_num_from_name};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Collection holding the semesters themselves
pub const SEMESTERS_COLLECTION: &str = "semesters";

/// Each semester owns a nested course collection
fn semester_courses_collection(semester_id: &str) -> String {
    format!("semesters/{semester_id}/courses")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SemesterDoc {
    name: String,
    sem_num: i32,
}

/// Typed access to semesters and their per-semester course entries.
#[derive(Clone)]
pub struct SemesterService {
    store: Arc<dyn DocumentStore>,
}

impl SemesterService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list_semesters(&self) -> Result<Vec<Semester>, StoreError> {
        let docs = self.store.list_all(SEMESTERS_COLLECTION).await?;
        docs.into_iter()
            .map(|doc| {
                let fields: SemesterDoc = serde_json::from_value(doc.data)?;
                Ok(Semester {
                    id: doc.id,
                    name: fields.name,
                    sem_num: fields.sem_num,
                })
            })
            .collect()
    }

    /// Creates a semester, deriving `semNum` from the name.
    pub async fn add_semester(&self, name: &str) -> Result<Semester, StoreError> {
        let sem_num = sem_num_from_name(name);
        let id = self
            .store
            .insert(SEMESTERS_COLLECTION, json!({ "name": name, "semNum": sem_num }))
            .await?;

        Ok(Semester {
            id,
            name: name.to_owned(),
            sem_num,
        })
    }

    pub async fn courses_for_semester(
        &self,
        semester_id: &str,
    ) -> Result<Vec<SemesterCourseEntry>, StoreError> {
        let collection = semester_courses_collection(semester_id);
        let docs = self.store.list_all(&collection).await?;
        docs.into_iter()
            .map(|doc| {
                let mut entry: SemesterCourseEntry = serde_json::from_value(doc.data)?;
                entry.course.id = Some(doc.id);
                Ok(entry)
            })
            .collect()
    }

    /// Adds a course to a semester. The course must already carry its catalog
    /// id; the entry is written under that same id, so adding the same course
    /// again overwrites the existing entry instead of duplicating it.
    pub async fn add_course_to_semester(
        &self,
        semester_id: &str,
        course: &Course,
    ) -> Result<SemesterCourseEntry, StoreError> {
        let course_id = course.id.clone().ok_or(StoreError::MissingCourseId)?;

        let entry = SemesterCourseEntry {
            course: course.clone(),
            show_details: false,
        };
        let mut doc = serde_json::to_value(&entry)?;
        if let Some(fields) = doc.as_object_mut() {
            fields.remove("id");
        }

        let collection = semester_courses_collection(semester_id);
        self.store.set_by_id(&collection, &course_id, doc).await?;

        Ok(entry)
    }

    pub async fn delete_course_from_semester(
        &self,
        semester_id: &str,
        course_id: &str,
    ) -> Result<(), StoreError> {
        let collection = semester_courses_collection(semester_id);
        self.store.delete_by_id(&collection, course_id).await
    }

    /// Persists the per-entry visibility flag. The catalog record is left
    /// untouched; only the semester-scoped mirror changes.
    pub async fn set_course_details_visibility(
        &self,
        semester_id: &str,
        course_id: &str,
        show_details: bool,
    ) -> Result<(), StoreError> {
        let collection = semester_courses_collection(semester_id);
        let docs = self.store.list_all(&collection).await?;

        let doc = docs
            .into_iter()
            .find(|doc| doc.id == course_id)
            .ok_or_else(|| StoreError::not_found(&collection, course_id))?;

        let mut entry: SemesterCourseEntry = serde_json::from_value(doc.data)?;
        entry.show_details = show_details;

        let mut updated = serde_json::to_value(&entry)?;
        if let Some(fields) = updated.as_object_mut() {
            fields.remove("id");
        }

        self.store.set_by_id(&collection, course_id, updated).await
    }
}
