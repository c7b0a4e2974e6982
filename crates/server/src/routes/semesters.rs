use crate::{
    dtos::MessageResponse,
    dtos::course::AddCourseRequest,
    dtos::semester::{CreateSemesterRequest, CreateSemesterResponse, UpdateDetailsRequest},
    error::ApiError,
    state::AppState,
};
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use models::{Semester, SemesterCourseEntry};

/// Get all semesters
#[utoipa::path(
    get,
    path = "/semesters",
    responses(
        (status = 200, description = "Semesters retrieved successfully", body = Vec<Semester>),
        (status = 500, description = "Store failure")
    ),
    tag = "Semesters"
)]
pub async fn list_semesters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Semester>>, ApiError> {
    Ok(Json(state.semesters.list_semesters().await?))
}

/// Create a new semester
#[utoipa::path(
    post,
    path = "/semesters",
    request_body = CreateSemesterRequest,
    responses(
        (status = 201, description = "Semester created", body = CreateSemesterResponse),
        (status = 400, description = "Missing semester name"),
        (status = 500, description = "Store failure")
    ),
    tag = "Semesters"
)]
pub async fn create_semester(
    State(state): State<AppState>,
    Json(body): Json<CreateSemesterRequest>,
) -> Result<(StatusCode, Json<CreateSemesterResponse>), ApiError> {
    // validated before any store call
    let name = body
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::Validation("Semester name is required".to_owned()))?;

    let semester = state.semesters.add_semester(name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateSemesterResponse {
            id: semester.id,
            name: semester.name,
        }),
    ))
}

/// Get all courses stored under a semester
#[utoipa::path(
    get,
    path = "/semesters/{semester_id}/courses",
    params(("semester_id" = String, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Semester courses retrieved", body = Vec<SemesterCourseEntry>),
        (status = 500, description = "Store failure")
    ),
    tag = "Semesters"
)]
pub async fn list_semester_courses(
    State(state): State<AppState>,
    Path(semester_id): Path<String>,
) -> Result<Json<Vec<SemesterCourseEntry>>, ApiError> {
    Ok(Json(state.semesters.courses_for_semester(&semester_id).await?))
}

/// Add a catalog course to a semester
#[utoipa::path(
    post,
    path = "/semesters/{semester_id}/courses",
    params(("semester_id" = String, Path, description = "Semester id")),
    request_body = AddCourseRequest,
    responses(
        (status = 201, description = "Course added to semester", body = SemesterCourseEntry),
        (status = 400, description = "Missing required course fields or course id"),
        (status = 500, description = "Store failure")
    ),
    tag = "Semesters"
)]
pub async fn add_semester_course(
    State(state): State<AppState>,
    Path(semester_id): Path<String>,
    Json(body): Json<AddCourseRequest>,
) -> Result<(StatusCode, Json<SemesterCourseEntry>), ApiError> {
    let course = body.into_course()?;
    let entry = state
        .semesters
        .add_course_to_semester(&semester_id, &course)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remove a course from a semester
#[utoipa::path(
    delete,
    path = "/semesters/{semester_id}/courses/{course_id}",
    params(
        ("semester_id" = String, Path, description = "Semester id"),
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course removed", body = MessageResponse),
        (status = 404, description = "No such course in the semester")
    ),
    tag = "Semesters"
)]
pub async fn delete_semester_course(
    State(state): State<AppState>,
    Path((semester_id, course_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .semesters
        .delete_course_from_semester(&semester_id, &course_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Course deleted successfully".to_owned(),
    }))
}

/// Show or hide the extended details of a semester course entry
#[utoipa::path(
    patch,
    path = "/semesters/{semester_id}/courses/{course_id}/details",
    params(
        ("semester_id" = String, Path, description = "Semester id"),
        ("course_id" = String, Path, description = "Course id")
    ),
    request_body = UpdateDetailsRequest,
    responses(
        (status = 200, description = "Visibility updated", body = MessageResponse),
        (status = 404, description = "No such course in the semester")
    ),
    tag = "Semesters"
)]
pub async fn update_course_details(
    State(state): State<AppState>,
    Path((semester_id, course_id)): Path<(String, String)>,
    Json(body): Json<UpdateDetailsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .semesters
        .set_course_details_visibility(&semester_id, &course_id, body.show_details)
        .await?;

    Ok(Json(MessageResponse {
        message: "Course details updated".to_owned(),
    }))
}
