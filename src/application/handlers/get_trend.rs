//! GetTrendHandler - query handler for a user's risk trend.

use std::sync::Arc;

use crate::domain::assessment::{derive_trend, AssessmentError, RiskLevel, Trend};
use crate::domain::foundation::UserId;
use crate::ports::{PageRequest, SubmissionStore};

/// Query for the trend of the caller's two most recent submissions.
#[derive(Debug, Clone)]
pub struct GetTrendQuery {
    pub user_id: UserId,
}

/// Handler deriving the ordinal trend from stored history.
pub struct GetTrendHandler {
    store: Arc<dyn SubmissionStore>,
}

impl GetTrendHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetTrendQuery) -> Result<Option<Trend>, AssessmentError> {
        let page = self
            .store
            .list_for_user(&query.user_id, PageRequest::new(1, 2))
            .await?;

        let levels: Vec<RiskLevel> = page
            .items
            .iter()
            .map(|view| view.assessment.risk_level())
            .collect();

        Ok(derive_trend(&levels))
    }
}
