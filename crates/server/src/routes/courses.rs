use crate::{
    dtos::course::ImportResponse, error::ApiError, services::import::import_subject as run_import,
    state::AppState,
};
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use models::Course;

/// Get every course in the global catalog
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "Catalog retrieved successfully", body = Vec<Course>),
        (status = 500, description = "Store failure")
    ),
    tag = "Courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(state.courses.list_all().await?))
}

/// Import every course for a subject from the external catalog API
#[utoipa::path(
    post,
    path = "/courses/{term}/{subject}",
    params(
        ("term" = String, Path, description = "Roster term, e.g. FA25"),
        ("subject" = String, Path, description = "Subject code, e.g. CS")
    ),
    responses(
        (status = 201, description = "Courses imported", body = ImportResponse),
        (status = 404, description = "No courses found for the term and subject"),
        (status = 502, description = "Catalog API unreachable"),
        (status = 500, description = "Store failure")
    ),
    tag = "Courses"
)]
pub async fn import_subject(
    State(state): State<AppState>,
    Path((term, subject)): Path<(String, String)>,
) -> Result<(StatusCode, Json<ImportResponse>), ApiError> {
    let imported = run_import(state.catalog.as_ref(), &state.courses, &term, &subject).await?;

    let response = ImportResponse {
        message: format!("Successfully added {} courses", imported.len()),
        courses: imported,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
