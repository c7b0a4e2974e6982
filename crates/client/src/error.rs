use catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status and, when available, its
    /// `{error}` body message
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
