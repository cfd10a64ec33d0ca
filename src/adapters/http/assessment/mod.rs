//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::AssessmentHandlers;
pub use routes::assessment_router;
