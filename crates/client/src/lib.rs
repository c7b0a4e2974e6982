pub mod api;
pub mod detail_cache;
pub mod error;
pub mod session;

pub use api::{HttpPlanApi, ImportSummary, PlanApi};
pub use detail_cache::DetailCache;
pub use error::ClientError;
pub use session::PlanSession;
