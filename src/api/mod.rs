//! HTTP API Handlers and Routes
//!
//! This module provides the JSON API layer for Taskhub, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Session (`/api/session`)
//! - `POST /api/session` - Login with email and password
//! - `DELETE /api/session` - Logout
//!
//! ## Users (`/api/users`)
//! - `POST /api/users` - Register (public)
//! - `GET /api/users` - List users (public fields only)
//! - `PATCH /api/users/{id}` - Update own account
//! - `DELETE /api/users/{id}` - Delete own account
//!
//! ## Statuses (`/api/statuses`), Labels (`/api/labels`)
//! - Authenticated CRUD
//!
//! ## Tasks (`/api/tasks`)
//! - `POST /api/tasks` - Create (acting user becomes creator)
//! - `GET /api/tasks`, `GET /api/tasks/{id}` - Read
//! - `PATCH /api/tasks/{id}` - Update (any authenticated user)
//! - `DELETE /api/tasks/{id}` - Delete (creator only; a non-creator gets the
//!   same 404 as for a missing task)
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! # Authentication
//!
//! Protected endpoints accept the session token either as a `session` cookie
//! (set on login) or as a bearer header:
//! ```text
//! Authorization: Bearer <token>
//! ```

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
