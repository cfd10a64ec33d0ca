//! GetHistoryHandler - query handler for a user's submission history.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::UserId;
use crate::ports::{PageRequest, SubmissionPage, SubmissionStore};

/// Query for one page of the caller's submission history.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub user_id: UserId,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl GetHistoryQuery {
    /// Creates a query for the first page with the default page size.
    pub fn first_page(user_id: UserId) -> Self {
        Self {
            user_id,
            page: None,
            limit: None,
        }
    }

    fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

/// Handler for listing a user's submissions, newest first.
pub struct GetHistoryHandler {
    store: Arc<dyn SubmissionStore>,
}

impl GetHistoryHandler {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetHistoryQuery) -> Result<SubmissionPage, AssessmentError> {
        let page = self
            .store
            .list_for_user(&query.user_id, query.page_request())
            .await?;
        Ok(page)
    }
}
