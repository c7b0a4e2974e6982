use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport failure or malformed response body
    #[error("catalog API unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The catalog API answered with a non-success status
    #[error("catalog API returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// The roster has no classes for the requested pair. Non-fatal: callers
    /// report it as zero courses found.
    #[error("no courses found for {subject} in semester {term}")]
    EmptyResult { term: String, subject: String },
}
