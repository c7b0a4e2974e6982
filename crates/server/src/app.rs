use crate::{
    doc::ApiDoc,
    routes::{courses, health, root, semesters},
    state::AppState,
};
use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application router over the given state
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root::root))
        .route("/courses", get(courses::list_courses))
        .route("/courses/{term}/{subject}", post(courses::import_subject))
        .route(
            "/semesters",
            get(semesters::list_semesters).post(semesters::create_semester),
        )
        .route(
            "/semesters/{semester_id}/courses",
            get(semesters::list_semester_courses).post(semesters::add_semester_course),
        )
        .route(
            "/semesters/{semester_id}/courses/{course_id}",
            delete(semesters::delete_semester_course),
        )
        .route(
            "/semesters/{semester_id}/courses/{course_id}/details",
            patch(semesters::update_course_details),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
