//! Per-user submission counter port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Counts completed submissions on the identity collaborator's user record.
///
/// The count is global mutable state scoped to the user record, so the only
/// operation offered is an atomic add. Implementations must never
/// read-modify-write.
#[async_trait]
pub trait SubmissionCounter: Send + Sync {
    /// Atomically increments the user's completed-submission count by one.
    async fn increment(&self, user_id: &UserId) -> Result<(), DomainError>;
}
