//! Authentication and ownership-based authorization.
//!
//! This module is the trust boundary of Taskhub. It covers:
//!
//! - [`auth::password`](crate::auth::password) - credential digests
//! - [`auth::strategy`](crate::auth::strategy) - credential verification
//! - [`auth::session`](crate::auth::session) - signed session tokens
//! - [`auth::middleware`](crate::auth::middleware) - axum layers and extractors
//! - [`auth::guard`](crate::auth::guard) - single-owner authorization
//!
//! # Security Properties
//!
//! - **Enumeration resistance**: a failed login never reveals whether the
//!   email exists or the password was wrong.
//! - **No partial trust**: a session token that fails signature or expiry
//!   checks is treated exactly like no token at all.
//! - **Live principals**: `resolve` re-fetches the user on every request, so
//!   deleting an account invalidates its sessions without a revocation list.
//! - **Silent denial**: mutating someone else's resource answers exactly like
//!   mutating a resource that does not exist.
//!
//! # Usage
//!
//! ```ignore
//! use taskhub::auth::{guard, session::SessionManager, strategy::FormStrategy};
//!
//! let sessions = SessionManager::new(config.session.secret.clone(), config.session.ttl_secs);
//! let token = sessions.establish(&user)?;
//! match guard::authorize(Some(&user), &task) {
//!     guard::Access::Allow => { /* proceed */ }
//!     guard::Access::Deny(_) => { /* answer as not-found */ }
//! }
//! ```

/// Single-owner authorization guard.
pub mod guard;
/// Axum middleware and extractors for session resolution.
pub mod middleware;
/// Credential digest computation and comparison.
pub mod password;
/// Session token issuing, validation, and teardown.
pub mod session;
/// Pluggable credential verification strategies.
pub mod strategy;
