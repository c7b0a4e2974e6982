use axum::http::StatusCode;

/// API root, kept as a cheap reachability probe
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is reachable", content_type = "text/plain", body = String)
    ),
    tag = ""
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello world!")
}
