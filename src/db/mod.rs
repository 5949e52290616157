//! Database clients.
//!
//! This module provides the relational store behind the task tracker:
//!
//! - **Turso/SQLite**: users, statuses, tasks, labels
//!
//! The `DatabaseClient` trait abstracts over the backends; the user lookup
//! methods on it are the only store surface the authentication subsystem
//! touches, and it touches them read-only.

pub mod traits;
pub mod turso;

pub use traits::{DatabaseClient, DatabaseProvider};
pub use turso::TursoClient;
