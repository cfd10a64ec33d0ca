//! PostgreSQL implementation of SubmissionStore.
//!
//! Writes one row per submission; history reads project the row without its
//! provenance columns, ordered by creation time descending.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::assessment::{
    Confidence, FactorVector, RiskAssessment, RiskLevel, Submission,
};
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, Timestamp, UserId};
use crate::ports::{PageRequest, SubmissionPage, SubmissionStore, SubmissionView};

/// PostgreSQL implementation of SubmissionStore.
#[derive(Clone)]
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Creates a new PostgresSubmissionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM submissions WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to count submissions: {}", e),
                    )
                })?;

        Ok(result.0 as u64)
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn record(&self, submission: &Submission) -> Result<(), DomainError> {
        let factors = submission.factors();
        let assessment = submission.assessment();
        let provenance = submission.provenance();

        sqlx::query(
            r#"
            INSERT INTO submissions (
                id, user_id,
                sleep_hours, anxiety_level, stress_frequency, financial_stress,
                social_support, work_life_balance, physical_activity,
                substance_use, mood_changes, suicidal_thoughts,
                risk_level, confidence, recommendations, assessed_at,
                caller_address, client_identifier, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19)
            "#,
        )
        .bind(submission.id().as_uuid())
        .bind(submission.user_id().as_str())
        .bind(i16::from(factors.sleep_hours()))
        .bind(i16::from(factors.anxiety_level()))
        .bind(i16::from(factors.stress_frequency()))
        .bind(i16::from(factors.financial_stress()))
        .bind(i16::from(factors.social_support()))
        .bind(i16::from(factors.work_life_balance()))
        .bind(i16::from(factors.physical_activity()))
        .bind(i16::from(factors.substance_use()))
        .bind(i16::from(factors.mood_changes()))
        .bind(i16::from(factors.suicidal_thoughts()))
        .bind(assessment.risk_level().label())
        .bind(assessment.confidence().value())
        .bind(assessment.recommendations().to_vec())
        .bind(assessment.created_at().as_datetime())
        .bind(provenance.caller_address())
        .bind(provenance.client_identifier())
        .bind(submission.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to record submission: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<SubmissionPage, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id,
                   sleep_hours, anxiety_level, stress_frequency, financial_stress,
                   social_support, work_life_balance, physical_activity,
                   substance_use, mood_changes, suicidal_thoughts,
                   risk_level, confidence, recommendations, assessed_at,
                   created_at
            FROM submissions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_str())
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list submissions: {}", e),
            )
        })?;

        let items: Result<Vec<SubmissionView>, DomainError> =
            rows.into_iter().map(row_to_submission_view).collect();
        let items = items?;

        let total = self.count_for_user(user_id).await?;

        Ok(SubmissionPage {
            items,
            page: page.page(),
            limit: page.limit(),
            total,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

fn row_to_submission_view(row: sqlx::postgres::PgRow) -> Result<SubmissionView, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;

    let factor_columns = [
        "sleep_hours",
        "anxiety_level",
        "stress_frequency",
        "financial_stress",
        "social_support",
        "work_life_balance",
        "physical_activity",
        "substance_use",
        "mood_changes",
        "suicidal_thoughts",
    ];
    let mut values = [0i64; 10];
    for (value, column) in values.iter_mut().zip(factor_columns) {
        let v: i16 = row
            .try_get(column)
            .map_err(|e| db_error("Failed to get factor column", e))?;
        *value = i64::from(v);
    }
    let factors = FactorVector::from_values(values)
        .map_err(|e| db_error("Stored factors out of range", e))?;

    let risk_level_str: String = row
        .try_get("risk_level")
        .map_err(|e| db_error("Failed to get risk_level", e))?;
    let risk_level: RiskLevel = risk_level_str
        .parse()
        .map_err(|e| db_error("Invalid stored risk_level", e))?;

    let confidence_value: f64 = row
        .try_get("confidence")
        .map_err(|e| db_error("Failed to get confidence", e))?;
    let confidence = Confidence::try_new(confidence_value)
        .map_err(|e| db_error("Invalid stored confidence", e))?;

    let recommendations: Vec<String> = row
        .try_get("recommendations")
        .map_err(|e| db_error("Failed to get recommendations", e))?;

    let assessed_at: chrono::DateTime<chrono::Utc> = row
        .try_get("assessed_at")
        .map_err(|e| db_error("Failed to get assessed_at", e))?;

    let assessment = RiskAssessment::from_parts(
        risk_level,
        confidence,
        recommendations,
        Timestamp::from_datetime(assessed_at),
    )
    .map_err(|e| db_error("Invalid stored assessment", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("Failed to get created_at", e))?;

    Ok(SubmissionView {
        id: SubmissionId::from_uuid(id),
        factors,
        assessment,
        created_at: Timestamp::from_datetime(created_at),
    })
}
