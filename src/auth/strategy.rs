//! Credential verification strategies.
//!
//! One strategy exists today (email + password form login), but the seam is
//! a trait so additional strategies are additional implementations rather
//! than changes to the callers.

use crate::auth::password;
use crate::db::DatabaseClient;
use crate::types::{AppError, User};
use async_trait::async_trait;
use std::sync::Arc;

/// The one user-facing message for a failed credential check. Shared by the
/// "no such account" and "wrong password" paths so responses cannot be used
/// to enumerate accounts.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Why an authentication attempt did not produce a user.
#[derive(Debug, thiserror::Error)]
pub enum AuthFailure {
    /// Unknown identity or wrong secret; the two are never distinguished
    /// past this boundary.
    #[error("{INVALID_CREDENTIALS_MESSAGE}")]
    InvalidCredentials,

    /// The credential check could not run (store failure). Never a partial
    /// authentication.
    #[error(transparent)]
    Unavailable(AppError),
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::InvalidCredentials => {
                AppError::Auth(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AuthFailure::Unavailable(e) => e,
        }
    }
}

/// A pluggable credential verifier.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Validates a presented credential pair and yields the authenticated
    /// user, or a typed failure.
    async fn authenticate(&self, email: &str, secret: &str) -> Result<User, AuthFailure>;
}

/// Form login: exact-match email lookup, then digest comparison.
pub struct FormStrategy {
    store: Arc<dyn DatabaseClient>,
}

impl FormStrategy {
    /// Builds the strategy over a principal store.
    pub fn new(store: Arc<dyn DatabaseClient>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialVerifier for FormStrategy {
    async fn authenticate(&self, email: &str, secret: &str) -> Result<User, AuthFailure> {
        // Case-sensitive, no normalization; normalizing is the caller's call.
        let user = self
            .store
            .get_user_by_email(email)
            .await
            .map_err(AuthFailure::Unavailable)?;

        // Both failure paths produce the identical failure; the cause is
        // only ever visible in internal logs.
        let Some(user) = user else {
            tracing::debug!(email, "login rejected: unknown email");
            return Err(AuthFailure::InvalidCredentials);
        };

        if !password::matches(secret, &user.password_digest) {
            tracing::debug!(email, "login rejected: wrong password");
            return Err(AuthFailure::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "login accepted");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TursoClient;

    async fn strategy_with_user(email: &str, secret: &str) -> FormStrategy {
        let store = TursoClient::new_memory()
            .await
            .expect("should open in-memory store");
        store
            .create_user("Test", "User", email, &password::digest(secret))
            .await
            .expect("should create user");
        FormStrategy::new(Arc::new(store))
    }

    #[tokio::test]
    async fn valid_credentials_return_user() {
        let strategy = strategy_with_user("a@x.com", "s3cret").await;

        let user = strategy
            .authenticate("a@x.com", "s3cret")
            .await
            .expect("should authenticate");
        assert_eq!(user.email, "a@x.com");
        assert!(user.id > 0, "authenticated user should carry its id");
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_fail_identically() {
        let strategy = strategy_with_user("a@x.com", "s3cret").await;

        let unknown = strategy
            .authenticate("nobody@x.com", "s3cret")
            .await
            .expect_err("unknown email should fail");
        let wrong = strategy
            .authenticate("a@x.com", "not-the-secret")
            .await
            .expect_err("wrong password should fail");

        // Same variant, same rendered message.
        assert!(matches!(unknown, AuthFailure::InvalidCredentials));
        assert!(matches!(wrong, AuthFailure::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn email_comparison_is_case_sensitive() {
        let strategy = strategy_with_user("a@x.com", "s3cret").await;

        let result = strategy.authenticate("A@X.COM", "s3cret").await;
        assert!(matches!(result, Err(AuthFailure::InvalidCredentials)));
    }
}
