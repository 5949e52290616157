#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Domain Records =============

/// A registered user (the authenticated principal).
///
/// `password_digest` never leaves the process: it is skipped during
/// serialization and redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique identity key, compared case-sensitively.
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_digest: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A task status (e.g. "new", "in progress").
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

/// A task label.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

/// A tracked task. `creator_id` is set once at creation and never changes;
/// it is the sole input to the ownership check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status_id: i64,
    pub creator_id: i64,
    pub executor_id: Option<i64>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// When present, the stored credential digest is recomputed.
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; carries no credential material.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name(),
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub name: String,
    pub description: Option<String>,
    pub status_id: i64,
    pub executor_id: Option<i64>,
    #[serde(default)]
    pub label_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status_id: Option<i64>,
    pub executor_id: Option<i64>,
    pub label_ids: Option<Vec<i64>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NameRequest {
    pub name: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Database(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Auth(msg) => (axum::http::StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (axum::http::StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_digest: "deadbeef".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn user_debug_redacts_digest() {
        let rendered = format!("{:?}", sample_user());
        assert!(!rendered.contains("deadbeef"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn user_serialization_omits_digest() {
        let json = serde_json::to_value(sample_user()).expect("should serialize");
        assert!(json.get("password_digest").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn user_response_has_full_name_and_no_digest() {
        let resp = UserResponse::from(sample_user());
        assert_eq!(resp.full_name, "Ada Lovelace");
        let json = serde_json::to_string(&resp).expect("should serialize");
        assert!(!json.contains("deadbeef"));
    }
}
