pub mod db;
pub mod doc_store;
pub mod entities;
pub mod error;
pub mod memory;
pub mod services;
pub mod sql;

pub use doc_store::{Document, DocumentStore};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sql::SqlDocumentStore;
