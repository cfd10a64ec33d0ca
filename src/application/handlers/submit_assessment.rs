//! SubmitAssessmentHandler - orchestrates one assessment request.
//!
//! One transient invocation per request: validate, predict, persist,
//! count. A rejected payload produces no side effect; a persistence fault
//! fails the request. Remote predictor failures never reach this handler -
//! the failover composition behind the `RiskPredictor` port absorbs them.

use std::sync::Arc;

use crate::domain::assessment::{
    AssessmentError, FactorInput, FactorVector, Provenance, RiskAssessment, Submission,
};
use crate::domain::foundation::{SubmissionId, UserId};
use crate::ports::{RiskPredictor, SubmissionCounter, SubmissionStore};

/// Command carrying one submitted factor payload.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub user_id: UserId,
    pub factors: FactorInput,
    pub provenance: Provenance,
}

/// Outcome returned to the caller after a durable write.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub submission_id: SubmissionId,
    pub assessment: RiskAssessment,
}

/// Handler for submitting a questionnaire and producing an assessment.
pub struct SubmitAssessmentHandler {
    predictor: Arc<dyn RiskPredictor>,
    store: Arc<dyn SubmissionStore>,
    counter: Arc<dyn SubmissionCounter>,
}

impl SubmitAssessmentHandler {
    pub fn new(
        predictor: Arc<dyn RiskPredictor>,
        store: Arc<dyn SubmissionStore>,
        counter: Arc<dyn SubmissionCounter>,
    ) -> Self {
        Self {
            predictor,
            store,
            counter,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        let factors = FactorVector::validate(&cmd.factors)?;

        // The failover composition only errors when every configured
        // predictor fails, and the local engine is infallible.
        let assessment = self
            .predictor
            .predict(&factors)
            .await
            .map_err(|e| AssessmentError::Internal(e.to_string()))?;

        let submission = Submission::new(cmd.user_id, factors, assessment, cmd.provenance);
        self.store.record(&submission).await?;

        // The write is durable at this point; a counter fault must not
        // retract the result.
        if let Err(e) = self.counter.increment(submission.user_id()).await {
            tracing::error!(
                user_id = %submission.user_id(),
                error = %e,
                "submission counter increment failed"
            );
        }

        Ok(SubmitAssessmentResult {
            submission_id: submission.id(),
            assessment: submission.assessment().clone(),
        })
    }
}
