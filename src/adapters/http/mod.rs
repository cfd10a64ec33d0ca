//! HTTP adapters - REST API surface.

pub mod assessment;
pub mod health;
pub mod middleware;

// Re-export key types for convenience
pub use assessment::{assessment_router, AssessmentHandlers};
pub use health::health_router;
