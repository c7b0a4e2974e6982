use catalog::CatalogSource;
use std::sync::Arc;
use store::{
    DocumentStore,
    services::{CourseService, SemesterService},
};

/// Shared handles for every request handler. The document store and the
/// catalog client sit behind trait objects so tests can swap in fixtures.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub semesters: SemesterService,
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            courses: CourseService::new(Arc::clone(&store)),
            semesters: SemesterService::new(store),
            catalog,
        }
    }
}
