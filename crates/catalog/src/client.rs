use crate::{
    error::CatalogError,
    normalize::details_from_class,
    types::{RawClass, SearchResponse},
};
use async_trait::async_trait;
use log::warn;
use models::CourseDetails;

/// Production class-roster API base
pub const DEFAULT_BASE_URL: &str = "https://classes.cornell.edu/api/2.0";

/// The catalog operations the sync layer consumes. A trait so the server and
/// the client cache can be exercised against fixture catalogs in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All raw class records for a `(term, subject)` pair. Fails with
    /// [`CatalogError::EmptyResult`] when the roster has none.
    async fn fetch_subject_classes(
        &self,
        term: &str,
        subject: &str,
    ) -> Result<Vec<RawClass>, CatalogError>;

    /// The extended detail fields for one course, looked up by catalog number
    /// within its subject roster. An unlisted course yields empty details
    /// rather than an error.
    async fn fetch_course_details(
        &self,
        term: &str,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<CourseDetails, CatalogError>;
}

/// HTTP client for the class-roster search API.
///
/// No request timeout is imposed here; callers that need one configure it on
/// the underlying [`reqwest::Client`].
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    async fn search(&self, term: &str, subject: &str) -> Result<Vec<RawClass>, CatalogError> {
        let url = format!(
            "{}/search/classes.json?roster={term}&subject={subject}",
            self.base_url
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::BadStatus(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.data.classes)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_subject_classes(
        &self,
        term: &str,
        subject: &str,
    ) -> Result<Vec<RawClass>, CatalogError> {
        let classes = self.search(term, subject).await?;
        if classes.is_empty() {
            return Err(CatalogError::EmptyResult {
                term: term.to_owned(),
                subject: subject.to_owned(),
            });
        }

        Ok(classes)
    }

    async fn fetch_course_details(
        &self,
        term: &str,
        subject: &str,
        catalog_nbr: u32,
    ) -> Result<CourseDetails, CatalogError> {
        let classes = self.search(term, subject).await?;

        match classes
            .iter()
            .find(|class| class.catalog_nbr.as_u32() == Some(catalog_nbr))
        {
            Some(class) => Ok(details_from_class(class)),
            None => {
                warn!("course {subject} {catalog_nbr} not found in {term} roster");
                Ok(CourseDetails::default())
            }
        }
    }
}
