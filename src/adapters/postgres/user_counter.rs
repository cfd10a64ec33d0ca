//! PostgreSQL implementation of SubmissionCounter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::SubmissionCounter;

/// Atomic per-user counter on the identity collaborator's user record.
#[derive(Clone)]
pub struct PostgresSubmissionCounter {
    pool: PgPool,
}

impl PostgresSubmissionCounter {
    /// Creates a new PostgresSubmissionCounter.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionCounter for PostgresSubmissionCounter {
    async fn increment(&self, user_id: &UserId) -> Result<(), DomainError> {
        // Single atomic add; concurrent submissions never lose an increment.
        let result = sqlx::query(
            "UPDATE users SET assessments_count = assessments_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to increment submission counter: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(
                DomainError::new(ErrorCode::UserNotFound, "No user record for counter update")
                    .with_detail("user_id", user_id.as_str()),
            );
        }

        Ok(())
    }
}
