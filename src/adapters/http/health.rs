//! Service health endpoint.
//!
//! Reports liveness plus whether the remote predictor is currently
//! reachable. Diagnostic only: predictor reachability never gates the
//! submit path, which falls back to the local engine on its own.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::ports::RiskPredictor;

/// Health report for the service and its predictor dependency.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub predictor_reachable: bool,
    pub timestamp: String,
}

async fn health(State(predictor): State<Arc<dyn RiskPredictor>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "mindguard",
        predictor_reachable: predictor.health_check().await,
        timestamp: Timestamp::now().as_datetime().to_rfc3339(),
    })
}

/// Creates the health router.
pub fn health_router(predictor: Arc<dyn RiskPredictor>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(predictor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::predictor::MockPredictor;

    #[tokio::test]
    async fn health_reports_predictor_reachability() {
        let reachable: Arc<dyn RiskPredictor> = Arc::new(MockPredictor::new());
        let Json(response) = health(State(reachable)).await;
        assert_eq!(response.status, "healthy");
        assert!(response.predictor_reachable);

        let unreachable: Arc<dyn RiskPredictor> = Arc::new(MockPredictor::new().unhealthy());
        let Json(response) = health(State(unreachable)).await;
        assert!(!response.predictor_reachable);
    }
}
