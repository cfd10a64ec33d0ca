//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution. Field names on the wire are camelCase, matching the
//! questionnaire's declared field names.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SubmitAssessmentResult;
use crate::domain::assessment::{
    FactorInput, FactorVector, FactorViolations, FieldViolation, RiskAssessment, Trend,
};
use crate::ports::{SubmissionPage, SubmissionView};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for submitting a questionnaire.
///
/// Every field is optional at the HTTP layer so validation can report all
/// missing fields together instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub sleep_hours: Option<i64>,
    pub anxiety_level: Option<i64>,
    pub stress_frequency: Option<i64>,
    pub financial_stress: Option<i64>,
    pub social_support: Option<i64>,
    pub work_life_balance: Option<i64>,
    pub physical_activity: Option<i64>,
    pub substance_use: Option<i64>,
    pub mood_changes: Option<i64>,
    pub suicidal_thoughts: Option<i64>,
}

impl From<SubmitAssessmentRequest> for FactorInput {
    fn from(req: SubmitAssessmentRequest) -> Self {
        FactorInput {
            sleep_hours: req.sleep_hours,
            anxiety_level: req.anxiety_level,
            stress_frequency: req.stress_frequency,
            financial_stress: req.financial_stress,
            social_support: req.social_support,
            work_life_balance: req.work_life_balance,
            physical_activity: req.physical_activity,
            substance_use: req.substance_use,
            mood_changes: req.mood_changes,
            suicidal_thoughts: req.suicidal_thoughts,
        }
    }
}

/// Query parameters for the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQueryParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ViolationResponse {
    pub field: String,
    pub reason: String,
}

impl From<&FieldViolation> for ViolationResponse {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.clone(),
            reason: violation.reason.clone(),
        }
    }
}

/// Error payload for rejected or failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<ViolationResponse>>,
}

impl ErrorResponse {
    /// Builds the aggregated validation rejection.
    pub fn validation(violations: &FactorViolations) -> Self {
        Self {
            error: "Factor validation failed".to_string(),
            code: "VALIDATION_FAILED".to_string(),
            violations: Some(
                violations
                    .violations()
                    .iter()
                    .map(ViolationResponse::from)
                    .collect(),
            ),
        }
    }

    /// Builds a storage failure response.
    pub fn storage() -> Self {
        Self {
            error: "Failed to record assessment".to_string(),
            code: "DATABASE_ERROR".to_string(),
            violations: None,
        }
    }

    /// Builds a generic internal error response.
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
            code: "INTERNAL_ERROR".to_string(),
            violations: None,
        }
    }
}

/// Assessment payload returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub risk_level: String,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub timestamp: String,
}

impl From<&RiskAssessment> for AssessmentResponse {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            risk_level: assessment.risk_level().label().to_string(),
            confidence: assessment.confidence().value(),
            recommendations: assessment.recommendations().to_vec(),
            timestamp: assessment.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub submission_id: String,
    pub assessment: AssessmentResponse,
}

impl From<SubmitAssessmentResult> for SubmitAssessmentResponse {
    fn from(result: SubmitAssessmentResult) -> Self {
        Self {
            submission_id: result.submission_id.to_string(),
            assessment: AssessmentResponse::from(&result.assessment),
        }
    }
}

/// Factor values echoed back in history entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorsResponse {
    pub sleep_hours: u8,
    pub anxiety_level: u8,
    pub stress_frequency: u8,
    pub financial_stress: u8,
    pub social_support: u8,
    pub work_life_balance: u8,
    pub physical_activity: u8,
    pub substance_use: u8,
    pub mood_changes: u8,
    pub suicidal_thoughts: u8,
}

impl From<&FactorVector> for FactorsResponse {
    fn from(factors: &FactorVector) -> Self {
        Self {
            sleep_hours: factors.sleep_hours(),
            anxiety_level: factors.anxiety_level(),
            stress_frequency: factors.stress_frequency(),
            financial_stress: factors.financial_stress(),
            social_support: factors.social_support(),
            work_life_balance: factors.work_life_balance(),
            physical_activity: factors.physical_activity(),
            substance_use: factors.substance_use(),
            mood_changes: factors.mood_changes(),
            suicidal_thoughts: factors.suicidal_thoughts(),
        }
    }
}

/// One submission in a history page. Provenance is never included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: String,
    pub factors: FactorsResponse,
    pub assessment: AssessmentResponse,
    pub created_at: String,
}

impl From<&SubmissionView> for SubmissionResponse {
    fn from(view: &SubmissionView) -> Self {
        Self {
            id: view.id.to_string(),
            factors: FactorsResponse::from(&view.factors),
            assessment: AssessmentResponse::from(&view.assessment),
            created_at: view.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Paginated history response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<SubmissionResponse>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

impl From<SubmissionPage> for HistoryResponse {
    fn from(page: SubmissionPage) -> Self {
        let pages = page.pages();
        Self {
            items: page.items.iter().map(SubmissionResponse::from).collect(),
            page: page.page,
            limit: page.limit,
            total: page.total,
            pages,
        }
    }
}

/// Trend response; `trend` is null with fewer than two submissions.
#[derive(Debug, Clone, Serialize)]
pub struct TrendResponse {
    pub trend: Option<Trend>,
}
