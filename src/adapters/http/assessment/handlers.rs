//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetHistoryHandler, GetHistoryQuery, GetTrendHandler, GetTrendQuery, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use crate::domain::assessment::{AssessmentError, Provenance};

use super::dto::{
    ErrorResponse, HistoryQueryParams, HistoryResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse, TrendResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    history_handler: Arc<GetHistoryHandler>,
    trend_handler: Arc<GetTrendHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        history_handler: Arc<GetHistoryHandler>,
        trend_handler: Arc<GetTrendHandler>,
    ) -> Self {
        Self {
            submit_handler,
            history_handler,
            trend_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Submit a questionnaire
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let cmd = SubmitAssessmentCommand {
        user_id: user.id,
        factors: req.into(),
        provenance: provenance_from_headers(&headers),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response: SubmitAssessmentResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/history - List the caller's submissions
pub async fn get_history(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<HistoryQueryParams>,
) -> Response {
    let query = GetHistoryQuery {
        user_id: user.id,
        page: params.page,
        limit: params.limit,
    };

    match handlers.history_handler.handle(query).await {
        Ok(page) => {
            let response: HistoryResponse = page.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/trend - Risk trend over the two newest submissions
pub async fn get_trend(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetTrendQuery { user_id: user.id };

    match handlers.trend_handler.handle(query).await {
        Ok(trend) => (StatusCode::OK, Json(TrendResponse { trend })).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Builds audit provenance from transport headers.
fn provenance_from_headers(headers: &HeaderMap) -> Provenance {
    let caller_address = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(|s| s.trim().to_string());

    let client_identifier = headers
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    Provenance::new(caller_address, client_identifier)
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    match error {
        AssessmentError::Validation(violations) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&violations)),
        )
            .into_response(),
        AssessmentError::Storage(e) => {
            tracing::error!(error = %e, "assessment storage failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::storage())).into_response()
        }
        AssessmentError::Internal(message) => {
            tracing::error!(error = %message, "assessment internal failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
        }
    }
}
