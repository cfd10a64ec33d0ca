//! Risk predictor port - one `predict` capability, two implementations.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::{FactorVector, RiskAssessment};

/// Produces a risk assessment for a validated factor vector.
///
/// Implementations: the remote prediction service gateway and the local
/// deterministic scoring engine. Callers depend only on this trait and a
/// configured fallback order; they never blend the two results.
#[async_trait]
pub trait RiskPredictor: Send + Sync {
    /// Predicts the risk assessment for one factor vector.
    ///
    /// Every submission is scored fresh; implementations must not cache.
    async fn predict(&self, factors: &FactorVector) -> Result<RiskAssessment, PredictorError>;

    /// Reports whether the predictor is currently reachable.
    ///
    /// Diagnostic only, never consulted on the submit path. The local
    /// engine is always reachable.
    async fn health_check(&self) -> bool {
        true
    }

    /// Short adapter name for logs.
    fn name(&self) -> &'static str;
}

/// Failure modes of a prediction attempt.
///
/// Every variant signals fallback to the next predictor in the configured
/// order; none is surfaced to the end caller.
#[derive(Debug, Clone, Error)]
pub enum PredictorError {
    /// The attempt exceeded the configured hard time bound.
    #[error("prediction timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The prediction service could not be reached.
    #[error("prediction service unreachable: {0}")]
    Network(String),

    /// The prediction service answered with a non-success status.
    #[error("prediction service returned status {0}")]
    Status(u16),

    /// The response did not parse into the expected shape.
    #[error("prediction response malformed: {0}")]
    MalformedResponse(String),
}
