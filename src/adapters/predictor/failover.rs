//! Failover predictor - silent fallback composition over the predictor port.
//!
//! When the primary predictor fails, the fallback is asked exactly once.
//! The primary's failure is logged for observability and absorbed; it never
//! changes the caller-visible outcome. There is no retry of the primary.

use async_trait::async_trait;

use crate::domain::assessment::{FactorVector, RiskAssessment};
use crate::ports::{PredictorError, RiskPredictor};

/// Predictor composition with a fixed primary-then-fallback order.
///
/// In the reference wiring the primary is the remote gateway and the
/// fallback is the local scoring engine, making the composition infallible.
pub struct FailoverPredictor<P, F> {
    primary: P,
    fallback: F,
}

impl<P: RiskPredictor, F: RiskPredictor> FailoverPredictor<P, F> {
    /// Creates a failover predictor from a primary and its fallback.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: RiskPredictor + 'static, F: RiskPredictor + 'static> RiskPredictor
    for FailoverPredictor<P, F>
{
    async fn predict(&self, factors: &FactorVector) -> Result<RiskAssessment, PredictorError> {
        match self.primary.predict(factors).await {
            Ok(assessment) => Ok(assessment),
            Err(err) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %err,
                    "predictor failed, falling back"
                );
                self.fallback.predict(factors).await
            }
        }
    }

    async fn health_check(&self) -> bool {
        self.primary.health_check().await
    }

    fn name(&self) -> &'static str {
        "failover"
    }
}
