use crate::error::ApiError;
use models::{Course, Instructor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a bulk import: a human-readable summary plus the courses that
/// were actually persisted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportResponse {
    pub message: String,
    pub courses: Vec<Course>,
}

/// Body for adding a course to a semester. Every field is optional at the
/// serde level so that missing required fields surface as a 400 with a
/// useful message instead of a body-rejection error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCourseRequest {
    pub id: Option<String>,
    pub subject: Option<String>,
    pub catalog_nbr: Option<u32>,
    pub title_short: Option<String>,
    pub description: Option<String>,
    pub credits: Option<f32>,
    pub when_offered: Option<String>,
    pub instructors: Option<Vec<Instructor>>,
}

impl AddCourseRequest {
    /// Validates the required fields and builds the course to store.
    pub fn into_course(self) -> Result<Course, ApiError> {
        let (Some(subject), Some(catalog_nbr), Some(title_short)) =
            (self.subject, self.catalog_nbr, self.title_short)
        else {
            return Err(ApiError::Validation(
                "Course must have subject, catalogNbr, and titleShort".to_owned(),
            ));
        };

        Ok(Course {
            id: self.id,
            subject,
            catalog_nbr,
            title_short,
            description: self.description,
            credits: self.credits,
            when_offered: self.when_offered,
            instructors: self.instructors,
        })
    }
}
