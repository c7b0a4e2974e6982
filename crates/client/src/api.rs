use crate::error::ClientError;
use async_trait::async_trait;
use catalog::{CatalogClient, CatalogSource};
use models::{Course, CourseDetails, Semester, SemesterCourseEntry, sem_num_from_name};
use serde::Deserialize;

/// Default sync-service base when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Outcome of a populate-from-catalog request
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub message: String,
    pub count: usize,
}

/// Everything the plan session needs from the outside world: the sync
/// service's CRUD surface plus the external detail fetch. A trait so tests
/// can drive the session against a scripted implementation.
#[async_trait]
pub trait PlanApi: Send + Sync {
    async fn list_semesters(&self) -> Result<Vec<Semester>, ClientError>;
    async fn create_semester(&self, name: &str) -> Result<Semester, ClientError>;
    async fn list_all_courses(&self) -> Result<Vec<Course>, ClientError>;
    async fn courses_for_semester(
        &self,
        semester_id: &str,
    ) -> Result<Vec<SemesterCourseEntry>, ClientError>;
    async fn add_course_to_semester(
        &self,
        semester_id: &str,
        course: &Course,
    ) -> Result<SemesterCourseEntry, ClientError>;
    async fn delete_course_from_semester(
        &self,
        semester_id: &str,
        course_id: &str,
    ) -> Result<(), ClientError>;
    async fn update_course_details_visibility(
        &self,
        semester_id: &str,
        course_id: &str,
        show_details: bool,
    ) -> Result<(), ClientError>;
    async fn import_subject(&self, term: &str, subject: &str)
    -> Result<ImportSummary, ClientError>;
    async fn fetch_course_details(
        &self,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<CourseDetails, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct CreatedSemester {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct ImportBody {
    message: String,
    #[serde(default)]
    courses: Vec<Course>,
}

/// HTTP bindings for the sync service. Detail fetches go straight to the
/// external catalog (they never pass through the sync service), pinned to a
/// configured roster term.
pub struct HttpPlanApi {
    http: reqwest::Client,
    base_url: String,
    catalog: CatalogClient,
    detail_term: String,
}

impl HttpPlanApi {
    pub fn new(catalog: CatalogClient, detail_term: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL, catalog, detail_term)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        catalog: CatalogClient,
        detail_term: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            catalog,
            detail_term: detail_term.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps non-success responses to [`ClientError::Api`], extracting the
    /// server's `{error}` body when it has one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PlanApi for HttpPlanApi {
    async fn list_semesters(&self) -> Result<Vec<Semester>, ClientError> {
        let response = self.http.get(self.url("/semesters")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_semester(&self, name: &str) -> Result<Semester, ClientError> {
        let response = self
            .http
            .post(self.url("/semesters"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        let created: CreatedSemester = Self::check(response).await?.json().await?;

        // the create response carries no semNum; derive it the same way the
        // server does
        let sem_num = sem_num_from_name(&created.name);
        Ok(Semester {
            id: created.id,
            name: created.name,
            sem_num,
        })
    }

    async fn list_all_courses(&self) -> Result<Vec<Course>, ClientError> {
        let response = self.http.get(self.url("/courses")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn courses_for_semester(
        &self,
        semester_id: &str,
    ) -> Result<Vec<SemesterCourseEntry>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/semesters/{semester_id}/courses")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn add_course_to_semester(
        &self,
        semester_id: &str,
        course: &Course,
    ) -> Result<SemesterCourseEntry, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/semesters/{semester_id}/courses")))
            .json(course)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_course_from_semester(
        &self,
        semester_id: &str,
        course_id: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/semesters/{semester_id}/courses/{course_id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update_course_details_visibility(
        &self,
        semester_id: &str,
        course_id: &str,
        show_details: bool,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .patch(self.url(&format!(
                "/semesters/{semester_id}/courses/{course_id}/details"
            )))
            .json(&serde_json::json!({ "showDetails": show_details }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn import_subject(
        &self,
        term: &str,
        subject: &str,
    ) -> Result<ImportSummary, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/courses/{term}/{subject}")))
            .send()
            .await?;
        let body: ImportBody = Self::check(response).await?.json().await?;

        Ok(ImportSummary {
            message: body.message,
            count: body.courses.len(),
        })
    }

    async fn fetch_course_details(
        &self,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<CourseDetails, ClientError> {
        Ok(self
            .catalog
            .fetch_course_details(&self.detail_term, subject, catalog_nbr)
            .await?)
    }
}
