//! Errors for assessment use cases.

use thiserror::Error;

use crate::domain::foundation::DomainError;

use super::factors::FactorViolations;

/// Errors surfaced by the assessment application handlers.
#[derive(Debug, Clone, Error)]
pub enum AssessmentError {
    /// The submitted factor payload failed validation. Caller-fixable;
    /// carries every violated field.
    #[error("{0}")]
    Validation(#[from] FactorViolations),

    /// The submission could not be durably recorded. Fatal for the request:
    /// no assessment is reported without durable storage.
    #[error("storage failure: {0}")]
    Storage(DomainError),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{FactorInput, FactorVector};
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn validation_error_carries_violations() {
        let violations = FactorVector::validate(&FactorInput::default()).unwrap_err();
        let err = AssessmentError::from(violations.clone());

        match err {
            AssessmentError::Validation(v) => assert_eq!(v, violations),
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn storage_error_displays_domain_error() {
        let err: AssessmentError =
            DomainError::new(ErrorCode::DatabaseError, "Insert failed").into();
        assert_eq!(
            format!("{}", err),
            "storage failure: [DATABASE_ERROR] Insert failed"
        );
    }
}
