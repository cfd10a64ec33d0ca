//! JWT implementation of SessionValidator.
//!
//! Verifies HS256 bearer tokens issued by the identity collaborator and
//! maps the claims to an `AuthenticatedUser`. Token issuance lives entirely
//! outside this service.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims this service reads from a verified token. Expiry is enforced by
/// the `Validation` settings, not read here.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

/// HS256 token validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator for tokens signed with the given shared secret.
    pub fn new(secret: &Secret<String>) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(id, data.claims.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        email: Option<String>,
        exp: usize,
    }

    fn secret() -> Secret<String> {
        Secret::new("test-secret-with-enough-length-0123".to_string())
    }

    fn sign(claims: &TestClaims, secret: &Secret<String>) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[tokio::test]
    async fn valid_token_yields_authenticated_user() {
        let secret = secret();
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                email: Some("user@example.com".to_string()),
                exp: future_exp(),
            },
            &secret,
        );

        let validator = JwtSessionValidator::new(&secret);
        let user = validator.validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("user@example.com"));
    }

    #[tokio::test]
    async fn token_without_email_claim_still_validates() {
        let secret = secret();
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                email: None,
                exp: future_exp(),
            },
            &secret,
        );

        let validator = JwtSessionValidator::new(&secret);
        let user = validator.validate(&token).await.unwrap();
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let secret = secret();
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                email: None,
                exp: (chrono::Utc::now().timestamp() - 3600) as usize,
            },
            &secret,
        );

        let validator = JwtSessionValidator::new(&secret);
        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn wrong_signature_is_invalid() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                email: None,
                exp: future_exp(),
            },
            &Secret::new("a-completely-different-secret-value".to_string()),
        );

        let validator = JwtSessionValidator::new(&secret());
        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let validator = JwtSessionValidator::new(&secret());
        let result = validator.validate("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn empty_subject_is_invalid() {
        let secret = secret();
        let token = sign(
            &TestClaims {
                sub: String::new(),
                email: None,
                exp: future_exp(),
            },
            &secret,
        );

        let validator = JwtSessionValidator::new(&secret);
        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
