//! Submission store port (write + read side).

use async_trait::async_trait;

use crate::domain::assessment::{FactorVector, RiskAssessment, Submission};
use crate::domain::foundation::{DomainError, SubmissionId, Timestamp, UserId};

/// Offset-based page request. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Upper bound on caller-chosen page sizes.
    pub const MAX_LIMIT: u32 = 100;

    /// Creates a page request, clamping page to at least 1 and limit into
    /// 1..=MAX_LIMIT.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip for this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

/// Read-side projection of a submission. Provenance is audit-only and
/// deliberately absent.
#[derive(Debug, Clone)]
pub struct SubmissionView {
    pub id: SubmissionId,
    pub factors: FactorVector,
    pub assessment: RiskAssessment,
    pub created_at: Timestamp,
}

impl From<&Submission> for SubmissionView {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id(),
            factors: *submission.factors(),
            assessment: submission.assessment().clone(),
            created_at: submission.created_at(),
        }
    }
}

/// One page of a user's submissions, ordered newest first.
#[derive(Debug, Clone)]
pub struct SubmissionPage {
    pub items: Vec<SubmissionView>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl SubmissionPage {
    /// Total number of pages for this total and limit.
    pub fn pages(&self) -> u64 {
        let limit = u64::from(self.limit.max(1));
        (self.total + limit - 1) / limit
    }
}

/// Durable storage for submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Durably records one completed submission.
    ///
    /// Never fails silently: a persistence fault is an error for the
    /// request, because an assessment the user cannot later retrieve is
    /// worse than an explicit failure.
    async fn record(&self, submission: &Submission) -> Result<(), DomainError>;

    /// Lists the user's submissions ordered strictly descending by creation
    /// time.
    ///
    /// Offset pagination; a submission created during pagination may appear
    /// or be skipped at boundary pages.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<SubmissionPage, DomainError>;
}
