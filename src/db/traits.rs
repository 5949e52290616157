//! Database abstraction traits
//!
//! This module provides the `DatabaseClient` trait that abstracts over the
//! supported backends (in-memory SQLite, file-based SQLite, remote Turso).
//!
//! The user lookup methods (`get_user_by_email`, `get_user_by_id`) double as
//! the read contract the authentication subsystem depends on; everything else
//! exists for the CRUD surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskhub::db::{DatabaseClient, DatabaseProvider};
//!
//! // Use in-memory database (default for development/testing)
//! let db = DatabaseProvider::Memory.create_client().await?;
//!
//! // Use file-based SQLite
//! let db = DatabaseProvider::SQLite { path: "data.db".into() }.create_client().await?;
//! ```

use crate::types::{Label, Result, Status, Task, UpdateTaskRequest, User};
use async_trait::async_trait;

/// Database provider configuration
#[derive(Debug, Clone, Default)]
pub enum DatabaseProvider {
    /// In-memory SQLite database (ephemeral, lost on restart)
    #[default]
    Memory,
    /// File-based SQLite database
    SQLite {
        /// Path to the SQLite database file
        path: String,
    },
    /// Remote Turso database (requires network access)
    #[cfg(feature = "turso")]
    Turso {
        /// The Turso database URL (e.g., `libsql://your-db.turso.io`)
        url: String,
        /// Authentication token for the Turso database
        auth_token: String,
    },
}

impl DatabaseProvider {
    /// Create a database client from this provider configuration
    pub async fn create_client(&self) -> Result<Box<dyn DatabaseClient>> {
        match self {
            DatabaseProvider::Memory => {
                let client = super::turso::TursoClient::new_memory().await?;
                Ok(Box::new(client))
            }
            DatabaseProvider::SQLite { path } => {
                let client = super::turso::TursoClient::new_local(path).await?;
                Ok(Box::new(client))
            }
            #[cfg(feature = "turso")]
            DatabaseProvider::Turso { url, auth_token } => {
                let client =
                    super::turso::TursoClient::new_remote(url.clone(), auth_token.clone()).await?;
                Ok(Box::new(client))
            }
        }
    }

    /// Create from environment variables or use defaults
    pub fn from_env() -> Self {
        #[cfg(feature = "turso")]
        {
            if let (Ok(url), Ok(token)) = (
                std::env::var("TURSO_DATABASE_URL"),
                std::env::var("TURSO_AUTH_TOKEN"),
            ) {
                if !url.is_empty() && !token.is_empty() {
                    return DatabaseProvider::Turso {
                        url,
                        auth_token: token,
                    };
                }
            }
        }

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            if !path.is_empty() && path != ":memory:" {
                return DatabaseProvider::SQLite { path };
            }
        }

        DatabaseProvider::Memory
    }
}

/// Abstract trait for database operations
///
/// Implementations can use different backends (SQLite, Turso, etc.). All id
/// assignment happens in the store; callers never pick ids.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    // ============== User Operations ==============

    /// Create a new user. Fails with a conflict if the email is taken.
    async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<User>;

    /// Get a user by email (exact, case-sensitive match)
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get a user by ID
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;

    /// List all users
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Update a user; `None` fields are left untouched
    async fn update_user(
        &self,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        password_digest: Option<&str>,
    ) -> Result<User>;

    /// Delete a user. Fails with a conflict while the user still owns tasks;
    /// tasks merely assigned to the user have their executor cleared.
    async fn delete_user(&self, id: i64) -> Result<()>;

    // ============== Status Operations ==============

    /// Create a task status
    async fn create_status(&self, name: &str) -> Result<Status>;

    /// Get a status by ID
    async fn get_status(&self, id: i64) -> Result<Option<Status>>;

    /// List all statuses
    async fn list_statuses(&self) -> Result<Vec<Status>>;

    /// Rename a status
    async fn update_status(&self, id: i64, name: &str) -> Result<Status>;

    /// Delete a status. Fails with a conflict while tasks reference it.
    async fn delete_status(&self, id: i64) -> Result<()>;

    // ============== Label Operations ==============

    /// Create a label
    async fn create_label(&self, name: &str) -> Result<Label>;

    /// Get a label by ID
    async fn get_label(&self, id: i64) -> Result<Option<Label>>;

    /// List all labels
    async fn list_labels(&self) -> Result<Vec<Label>>;

    /// Rename a label
    async fn update_label(&self, id: i64, name: &str) -> Result<Label>;

    /// Delete a label. Fails with a conflict while tasks reference it.
    async fn delete_label(&self, id: i64) -> Result<()>;

    // ============== Task Operations ==============

    /// Create a task owned by `creator_id`
    async fn create_task(
        &self,
        name: &str,
        description: Option<&str>,
        status_id: i64,
        creator_id: i64,
        executor_id: Option<i64>,
        label_ids: &[i64],
    ) -> Result<Task>;

    /// Get a task by ID, with its labels
    async fn get_task(&self, id: i64) -> Result<Option<Task>>;

    /// List all tasks
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Update a task; `creator_id` is never touched
    async fn update_task(&self, id: i64, changes: &UpdateTaskRequest) -> Result<Task>;

    /// Delete a task
    async fn delete_task(&self, id: i64) -> Result<()>;
}
