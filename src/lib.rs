//! # Taskhub
//!
//! A task tracker backend (users, statuses, tasks, labels) whose core is a
//! conventional CRUD API; the part with real design content is the
//! authentication and ownership-authorization subsystem in [`auth`].
//!
//! ## Overview
//!
//! Taskhub can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `taskhub-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use taskhub::{AppState, db::DatabaseProvider, utils::Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let store = DatabaseProvider::from_env().create_client().await?;
//!     let state = AppState::new(config, store.into());
//!     let app = taskhub::api::routes::create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Security Model
//!
//! - Credentials are stored as one-way digests and verified by recomputation.
//! - Sessions are stateless HS256-signed tokens referencing the user id; the
//!   user record is re-fetched on every request, so deleting an account
//!   invalidates its sessions.
//! - Mutations on owned resources pass through a single-owner authorization
//!   guard; a denied mutation is externally indistinguishable from mutating a
//!   resource that does not exist.
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - authentication, sessions, and the ownership guard
//! - [`db`] - database abstraction (SQLite, Turso)
//! - [`types`] - common types and error handling
//! - [`utils`] - configuration

#![warn(missing_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Authentication, sessions, and ownership authorization.
pub mod auth;
/// Database clients (Turso/SQLite).
pub mod db;
/// Core types (records, requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{DatabaseClient, DatabaseProvider, TursoClient};
pub use types::{AppError, Result};
pub use utils::Config;

use crate::auth::session::SessionManager;
use crate::auth::strategy::{CredentialVerifier, FormStrategy};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup
    pub config: Arc<Config>,
    /// Database client
    pub store: Arc<dyn DatabaseClient>,
    /// Session token manager, constructed once from the signing key
    pub sessions: Arc<SessionManager>,
    /// Credential verification strategy
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Wires the state from configuration and a store. The session signing
    /// key is handed to the [`SessionManager`] here and nowhere else.
    pub fn new(config: Config, store: Arc<dyn DatabaseClient>) -> Self {
        let sessions = Arc::new(SessionManager::new(
            config.session.secret.clone(),
            config.session.ttl_secs,
        ));
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(FormStrategy::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            sessions,
            verifier,
        }
    }
}
