//! Local deterministic engine behind the predictor port.

use async_trait::async_trait;

use crate::domain::assessment::{assess, FactorVector, RiskAssessment};
use crate::ports::{PredictorError, RiskPredictor};

/// Adapter exposing the deterministic scoring engine as a `RiskPredictor`.
///
/// Infallible: every valid factor vector produces an assessment, which is
/// what makes it the terminal fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnginePredictor;

impl EnginePredictor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RiskPredictor for EnginePredictor {
    async fn predict(&self, factors: &FactorVector) -> Result<RiskAssessment, PredictorError> {
        Ok(assess(factors))
    }

    fn name(&self) -> &'static str {
        "engine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RiskLevel;

    #[tokio::test]
    async fn engine_never_fails() {
        let engine = EnginePredictor::new();
        let factors = FactorVector::from_values([5, 8, 7, 6, 3, 4, 3, 2, 6, 1]).unwrap();

        let assessment = engine.predict(&factors).await.unwrap();
        assert_eq!(assessment.risk_level(), RiskLevel::High);
    }

    #[tokio::test]
    async fn engine_is_always_healthy() {
        assert!(EnginePredictor::new().health_check().await);
    }
}
