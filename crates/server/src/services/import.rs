use crate::error::ApiError;
use catalog::{CatalogSource, course_from_class};
use log::{info, warn};
use models::Course;
use store::services::CourseService;

/// Pulls every class for `(term, subject)` from the catalog and persists the
/// normalized records one at a time, in catalog order.
///
/// Each insert is independent: a failed record is logged and skipped, never
/// aborting the rest of the batch. The returned list holds only the courses
/// that were actually written, each carrying its store-assigned id. There is
/// no atomicity across the batch; an interrupted import leaves the records
/// inserted so far in place.
pub async fn import_subject(
    catalog: &dyn CatalogSource,
    courses: &CourseService,
    term: &str,
    subject: &str,
) -> Result<Vec<Course>, ApiError> {
    let classes = catalog.fetch_subject_classes(term, subject).await?;

    let mut imported = Vec::new();
    for raw in &classes {
        let Some(mut course) = course_from_class(raw) else {
            continue;
        };

        match courses.add_course(&course).await {
            Ok(id) => {
                course.id = Some(id);
                imported.push(course);
            }
            Err(err) => {
                warn!(
                    "failed to insert {} {}: {err}",
                    course.subject, course.catalog_nbr
                );
            }
        }
    }

    info!(
        "imported {}/{} {subject} courses for {term}",
        imported.len(),
        classes.len()
    );
    Ok(imported)
}
