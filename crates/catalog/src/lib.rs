pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{CatalogClient, CatalogSource, DEFAULT_BASE_URL};
pub use error::CatalogError;
pub use normalize::{course_from_class, details_from_class};
pub use types::RawClass;
