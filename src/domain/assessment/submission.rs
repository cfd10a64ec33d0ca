//! Submission entity - one completed assessment owned by a user.

use crate::domain::foundation::{SubmissionId, Timestamp, UserId};

use super::factors::FactorVector;
use super::risk::RiskAssessment;

/// Audit metadata recorded with a submission. Never used in scoring, and
/// stripped from the history projection returned to the submitting user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    caller_address: Option<String>,
    client_identifier: Option<String>,
}

impl Provenance {
    /// Creates provenance from whatever the transport layer observed.
    pub fn new(caller_address: Option<String>, client_identifier: Option<String>) -> Self {
        Self {
            caller_address,
            client_identifier,
        }
    }

    pub fn caller_address(&self) -> Option<&str> {
        self.caller_address.as_deref()
    }

    pub fn client_identifier(&self) -> Option<&str> {
        self.client_identifier.as_deref()
    }
}

/// One completed assessment: the factor vector it was derived from, the
/// resulting risk assessment, the owning user, and audit provenance.
///
/// Created exactly once per successful orchestration; never mutated.
#[derive(Debug, Clone)]
pub struct Submission {
    id: SubmissionId,
    user_id: UserId,
    factors: FactorVector,
    assessment: RiskAssessment,
    provenance: Provenance,
    created_at: Timestamp,
}

impl Submission {
    /// Creates the submission produced by a successful orchestration call.
    pub fn new(
        user_id: UserId,
        factors: FactorVector,
        assessment: RiskAssessment,
        provenance: Provenance,
    ) -> Self {
        Self {
            id: SubmissionId::new(),
            user_id,
            factors,
            assessment,
            provenance,
            created_at: Timestamp::now(),
        }
    }

    /// Rehydrates a stored submission.
    pub fn from_parts(
        id: SubmissionId,
        user_id: UserId,
        factors: FactorVector,
        assessment: RiskAssessment,
        provenance: Provenance,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            factors,
            assessment,
            provenance,
            created_at,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn factors(&self) -> &FactorVector {
        &self.factors
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{FactorVector, RiskLevel};

    fn factors() -> FactorVector {
        FactorVector::from_values([7, 5, 5, 5, 7, 5, 5, 2, 3, 1]).unwrap()
    }

    #[test]
    fn new_submission_generates_identity_and_timestamp() {
        let user = UserId::new("user-1").unwrap();
        let assessment = RiskAssessment::for_level(RiskLevel::Low);
        let s1 = Submission::new(user.clone(), factors(), assessment.clone(), Provenance::default());
        let s2 = Submission::new(user, factors(), assessment, Provenance::default());

        assert_ne!(s1.id(), s2.id());
        assert!(!s1.created_at().is_after(&s2.created_at()));
    }

    #[test]
    fn submission_owns_its_parts() {
        let user = UserId::new("user-2").unwrap();
        let assessment = RiskAssessment::for_level(RiskLevel::Medium);
        let provenance = Provenance::new(Some("203.0.113.7".to_string()), Some("web".to_string()));

        let submission = Submission::new(user.clone(), factors(), assessment, provenance);

        assert_eq!(submission.user_id(), &user);
        assert_eq!(submission.factors().sleep_hours(), 7);
        assert_eq!(submission.assessment().risk_level(), RiskLevel::Medium);
        assert_eq!(submission.provenance().caller_address(), Some("203.0.113.7"));
        assert_eq!(submission.provenance().client_identifier(), Some("web"));
    }
}
