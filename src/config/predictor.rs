//! Remote predictor configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote predictor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Base URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hard upper bound on one prediction attempt, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PredictorConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate predictor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidPredictorUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidPredictorTimeout);
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    10
}
