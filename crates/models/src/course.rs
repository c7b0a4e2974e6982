use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// A course instructor as reported by the class roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netid: Option<String>,
}

/// A catalog course. `(subject, catalog_nbr)` is the natural key; `id` is the
/// store-assigned persistence key and is only present once the course has been
/// written to the course collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub subject: String,
    pub catalog_nbr: u32,
    pub title_short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_offered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<Instructor>>,
}

impl Course {
    /// The structural key for this course
    pub fn key(&self) -> CourseKey {
        CourseKey::new(&self.subject, self.catalog_nbr)
    }
}

/// The extended fields retrieved by a detail fetch. Every field is optional:
/// a detail fetch never fails a course record, missing data simply stays
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_offered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<Instructor>>,
}

impl CourseDetails {
    /// Merges these details into a course. Only populated fields overwrite;
    /// an unset detail field leaves the existing course value alone.
    pub fn merge_into(&self, course: &mut Course) {
        if let Some(description) = &self.description {
            course.description = Some(description.clone());
        }
        if let Some(credits) = self.credits {
            course.credits = Some(credits);
        }
        if let Some(when_offered) = &self.when_offered {
            course.when_offered = Some(when_offered.clone());
        }
        if let Some(instructors) = &self.instructors {
            course.instructors = Some(instructors.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.credits.is_none()
            && self.when_offered.is_none()
            && self.instructors.is_none()
    }
}

/// A course stored under a semester. The entry shares the id of the catalog
/// course it mirrors rather than minting its own, which makes re-adding the
/// same course an overwrite instead of a duplicate. The visibility flag lives
/// on the entry only; the catalog record is never touched after import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterCourseEntry {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default)]
    pub show_details: bool,
}

/// Composite structural key `subject + catalog_nbr`, rendered `"CS-1110"`.
///
/// The client cache matches semester entries by this key rather than by store
/// id, which assumes the key is unique within a single semester's course
/// list. Nothing enforces that uniqueness; duplicate entries would all be
/// updated by a structural-key merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseKey {
    pub subject: String,
    pub catalog_nbr: u32,
}

impl CourseKey {
    pub fn new(subject: &str, catalog_nbr: u32) -> Self {
        Self {
            subject: subject.to_owned(),
            catalog_nbr,
        }
    }

    /// Whether a course carries this key
    pub fn matches(&self, course: &Course) -> bool {
        course.subject == self.subject && course.catalog_nbr == self.catalog_nbr
    }
}

impl Display for CourseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.subject, self.catalog_nbr)
    }
}
