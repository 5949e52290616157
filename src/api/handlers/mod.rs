//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Label CRUD handlers.
pub mod labels;
/// Session handlers (login, logout).
pub mod session;
/// Status CRUD handlers.
pub mod statuses;
/// Task CRUD handlers with ownership-guarded deletion.
pub mod tasks;
/// User registration and self-service handlers.
pub mod users;
