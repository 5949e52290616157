//! Session token management.
//!
//! Sessions are stateless signed tokens (HS256) carrying nothing but the
//! user id and an expiry. The signing key is process-wide, injected at
//! construction, and immutable; rotating it invalidates every outstanding
//! session.
//!
//! `resolve` re-fetches the user record on every call instead of trusting
//! anything embedded in the token. This keeps resolved principals current
//! after profile or credential changes, and it is what invalidates all of a
//! user's sessions when the account is deleted: a structurally valid token
//! whose subject no longer exists resolves to [`SessionState::Unauthenticated`].

use crate::db::DatabaseClient;
use crate::types::{AppError, Result, User};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Signed token payload. Deliberately minimal: a principal reference, not a
/// principal snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    exp: usize,
    iat: usize,
}

/// Outcome of resolving a presented token.
///
/// Every verification failure (bad signature, expired, malformed, unknown
/// subject) collapses into `Unauthenticated`; a partially trusted session
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The token verified and its subject still exists.
    Authenticated(User),
    /// No usable session; the request proceeds anonymously.
    Unauthenticated,
}

impl SessionState {
    /// The authenticated user, if any.
    pub fn user(self) -> Option<User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }
}

/// Issues and validates session tokens.
pub struct SessionManager {
    signing_key: String,
    ttl_secs: i64,
}

impl SessionManager {
    /// Creates a manager from the process-wide signing key.
    ///
    /// # Arguments
    /// * `signing_key` - Secret for signing tokens (should be at least 32 chars)
    /// * `ttl_secs` - Token validity in seconds
    pub fn new(signing_key: String, ttl_secs: i64) -> Self {
        Self {
            signing_key,
            ttl_secs,
        }
    }

    /// Token validity in seconds, as configured.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issues a fresh signed token referencing `user`. Called only after a
    /// successful credential check; does not touch any other session.
    pub fn establish(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id.to_string(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.signing_key.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;

        tracing::debug!(user_id = user.id, "session established");
        Ok(token)
    }

    /// Resolves a presented token to a user.
    ///
    /// Runs on every request, including anonymous ones, so a missing or
    /// invalid token is an ordinary outcome, never an error. Only a store
    /// failure propagates, and it propagates as a failure rather than a
    /// partial authentication.
    pub async fn resolve(&self, token: &str, store: &dyn DatabaseClient) -> Result<SessionState> {
        let validation = Validation::new(Algorithm::HS256);

        let claims = match decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.signing_key.as_bytes()),
            &validation,
        ) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(reason = %e, "session token rejected");
                return Ok(SessionState::Unauthenticated);
            }
        };

        let Ok(user_id) = claims.sub.parse::<i64>() else {
            tracing::debug!(sub = %claims.sub, "session token carried a malformed subject");
            return Ok(SessionState::Unauthenticated);
        };

        // Re-fetch rather than trust the token; a deleted user yields
        // Unauthenticated even with a valid signature.
        match store.get_user_by_id(user_id).await? {
            Some(user) => Ok(SessionState::Authenticated(user)),
            None => {
                tracing::debug!(user_id, "session subject no longer exists");
                Ok(SessionState::Unauthenticated)
            }
        }
    }

    /// Logs a session out. Tokens are stateless, so there is nothing to
    /// revoke server-side; the transport drops the cookie. Succeeds even for
    /// garbage tokens.
    pub fn destroy(&self, token: &str) {
        tracing::debug!(token_len = token.len(), "session destroyed");
    }
}
