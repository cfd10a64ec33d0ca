//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_history, get_trend, submit_assessment, AssessmentHandlers};

/// Creates the assessment router with all endpoints.
pub fn assessment_router(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/history", get(get_history))
        .route("/trend", get(get_trend))
        .with_state(handlers)
}
