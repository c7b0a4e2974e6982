//! Shared fixtures for route and service tests: an in-memory app and a
//! canned catalog source.

use crate::{app::build_router, state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use catalog::{CatalogError, CatalogSource, RawClass, details_from_class};
use models::CourseDetails;
use serde_json::{Value, json};
use std::sync::Arc;
use store::MemoryStore;
use tower::ServiceExt;

/// Catalog stub: either serves canned classes or fails like a dead upstream
pub enum FixtureCatalog {
    Classes(Vec<RawClass>),
    Unreachable,
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn fetch_subject_classes(
        &self,
        term: &str,
        subject: &str,
    ) -> Result<Vec<RawClass>, CatalogError> {
        match self {
            Self::Classes(classes) if classes.is_empty() => Err(CatalogError::EmptyResult {
                term: term.to_owned(),
                subject: subject.to_owned(),
            }),
            Self::Classes(classes) => Ok(classes.clone()),
            Self::Unreachable => Err(CatalogError::BadStatus(StatusCode::BAD_GATEWAY)),
        }
    }

    async fn fetch_course_details(
        &self,
        _term: &str,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<CourseDetails, CatalogError> {
        match self {
            Self::Classes(classes) => Ok(classes
                .iter()
                .find(|class| {
                    class.subject == subject && class.catalog_nbr.as_u32() == Some(catalog_nbr)
                })
                .map(details_from_class)
                .unwrap_or_default()),
            Self::Unreachable => Err(CatalogError::BadStatus(StatusCode::BAD_GATEWAY)),
        }
    }
}

/// Three CS classes in ascending catalog order
pub fn fixture_classes() -> Vec<RawClass> {
    let raw = |number: u32, title: &str| {
        serde_json::from_value::<RawClass>(json!({
            "subject": "CS",
            "catalogNbr": number.to_string(),
            "titleShort": title,
            "description": format!("About {title}."),
            "catalogWhenOffered": "Fall, Spring",
            "enrollGroups": [{
                "unitsMinimum": 4.0,
                "classSections": [{"meetings": [{"instructors": []}]}]
            }]
        }))
        .unwrap()
    };

    vec![
        raw(1110, "Intro to Computing"),
        raw(2110, "OO Programming"),
        raw(3110, "Functional Programming"),
    ]
}

/// App over a fresh in-memory store and the given catalog
pub fn app_with(catalog: FixtureCatalog) -> Router {
    build_router(AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(catalog),
    ))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn patch(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Runs one request through the router and decodes the JSON body (Null when
/// the body is empty or not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
