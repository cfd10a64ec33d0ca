//! Mock predictor for tests.
//!
//! Configurable implementation of the `RiskPredictor` port: scripted
//! responses consumed in order, error injection for fallback testing, and
//! call tracking for verification.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::assessment::{FactorVector, RiskAssessment};
use crate::ports::{PredictorError, RiskPredictor};

/// One scripted mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(RiskAssessment),
    Failure(PredictorError),
}

/// Mock predictor with scripted outcomes.
///
/// Clones share the same script and call counter, so a test can hand one
/// clone to a composition and keep another for verification.
#[derive(Debug, Clone, Default)]
pub struct MockPredictor {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<u32>>,
    unhealthy: bool,
}

impl MockPredictor {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful prediction.
    pub fn with_success(self, assessment: RiskAssessment) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(assessment));
        self
    }

    /// Queues a failed prediction.
    pub fn with_error(self, error: PredictorError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Failure(error));
        self
    }

    /// Marks the mock as unreachable for health probes.
    pub fn unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }

    /// Number of predict calls received.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl RiskPredictor for MockPredictor {
    async fn predict(&self, _factors: &FactorVector) -> Result<RiskAssessment, PredictorError> {
        *self.calls.lock().unwrap() += 1;

        match self.outcomes.lock().unwrap().pop_front() {
            Some(MockOutcome::Success(assessment)) => Ok(assessment),
            Some(MockOutcome::Failure(error)) => Err(error),
            None => Err(PredictorError::Network("mock script exhausted".to_string())),
        }
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
