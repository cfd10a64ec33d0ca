//! Remote predictor gateway.
//!
//! Sends the factor vector to the prediction service and returns its
//! assessment verbatim - the remote answer is never blended with or
//! second-guessed against the local engine, beyond structural
//! well-formedness. Bounded-time, single attempt: any failure (timeout,
//! connection failure, non-success status, malformed body) signals fallback
//! to the caller's configured alternative.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    Confidence, FactorVector, RiskAssessment, RiskLevel, FACTOR_COUNT,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{PredictorError, RiskPredictor};

/// Configuration for the remote predictor gateway.
#[derive(Debug, Clone)]
pub struct RemotePredictorConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Hard upper bound on one prediction attempt.
    pub timeout: Duration,
}

impl RemotePredictorConfig {
    /// Creates a configuration with the reference 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP gateway to the remote prediction service.
#[derive(Clone)]
pub struct RemotePredictor {
    config: RemotePredictorConfig,
    client: Client,
}

impl RemotePredictor {
    /// Creates a new gateway with the given configuration.
    pub fn new(config: RemotePredictorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

/// Outbound wire format: the ten factors in canonical field order.
#[derive(Debug, Serialize)]
struct PredictRequest {
    features: [u8; FACTOR_COUNT],
}

/// Expected inbound shape. Anything else is a gateway failure.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: String,
    confidence: f64,
    recommendations: Vec<String>,
}

impl PredictResponse {
    fn into_assessment(self) -> Result<RiskAssessment, PredictorError> {
        let level: RiskLevel = self
            .prediction
            .parse()
            .map_err(|e: crate::domain::foundation::ValidationError| {
                PredictorError::MalformedResponse(e.to_string())
            })?;
        let confidence = Confidence::try_new(self.confidence)
            .map_err(|e| PredictorError::MalformedResponse(e.to_string()))?;

        RiskAssessment::from_parts(level, confidence, self.recommendations, Timestamp::now())
            .map_err(|e| PredictorError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl RiskPredictor for RemotePredictor {
    async fn predict(&self, factors: &FactorVector) -> Result<RiskAssessment, PredictorError> {
        let request = PredictRequest {
            features: factors.features(),
        };

        let response = self
            .client
            .post(self.predict_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PredictorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    PredictorError::Network(format!("connection failed: {}", e))
                } else {
                    PredictorError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(PredictorError::Status(response.status().as_u16()));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::MalformedResponse(e.to_string()))?;

        body.into_assessment()
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.health_url()).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
