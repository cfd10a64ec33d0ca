//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a verified
//! token. They have no provider dependencies - any identity collaborator can
//! populate them via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity collaborator.
    pub id: UserId,

    /// User's email address from the token claims, when present.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by the `SessionValidator` adapter after successfully
    /// verifying a token.
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The token signature is valid but the token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The identity collaborator could not be reached.
    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_holds_claims() {
        let user = AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("user@example.com".to_string()),
        );

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn auth_error_displays_reason() {
        assert_eq!(format!("{}", AuthError::InvalidToken), "Invalid token");
        assert_eq!(format!("{}", AuthError::TokenExpired), "Token expired");
        assert_eq!(
            format!("{}", AuthError::ServiceUnavailable("down".to_string())),
            "Authentication service unavailable: down"
        );
    }
}
