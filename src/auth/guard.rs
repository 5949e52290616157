//! Ownership-based authorization.
//!
//! The entire policy: a mutation on an owned resource is allowed if and only
//! if the acting user is the resource's owner. No roles, no delegation, no
//! admin override.
//!
//! Deny reasons exist for logging only. Callers must answer a denied request
//! exactly like a request for a resource that does not exist, so ownership
//! of other users' resources cannot be probed.

use crate::types::{Task, User};

/// A resource with exactly one owning user, fixed at creation.
pub trait Owned {
    /// Id of the user that owns this resource.
    fn owner_id(&self) -> i64;
}

impl Owned for Task {
    fn owner_id(&self) -> i64 {
        self.creator_id
    }
}

// Self-service account operations treat the user record as a resource that
// owns itself.
impl Owned for User {
    fn owner_id(&self) -> i64 {
        self.id
    }
}

/// Authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The acting user owns the resource.
    Allow,
    /// The mutation must not happen.
    Deny(DenyReason),
}

/// Why a mutation was denied. Logged, never surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No authenticated user on the request.
    NotAuthenticated,
    /// Authenticated, but not the owner.
    NotOwner,
}

impl Access {
    /// True only for [`Access::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Checks whether `user` may mutate `resource`.
pub fn authorize(user: Option<&User>, resource: &impl Owned) -> Access {
    match user {
        None => {
            tracing::debug!(owner_id = resource.owner_id(), "deny reason=not_authenticated");
            Access::Deny(DenyReason::NotAuthenticated)
        }
        Some(user) if user.id == resource.owner_id() => Access::Allow,
        Some(user) => {
            tracing::debug!(
                user_id = user.id,
                owner_id = resource.owner_id(),
                "deny reason=not_owner"
            );
            Access::Deny(DenyReason::NotOwner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{}@x.com", id),
            password_digest: "digest".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn task_owned_by(creator_id: i64) -> Task {
        Task {
            id: 1,
            name: "Fix the roof".to_string(),
            description: None,
            status_id: 1,
            creator_id,
            executor_id: None,
            label_ids: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn owner_is_allowed() {
        let acting = user(1);
        let task = task_owned_by(1);
        assert_eq!(authorize(Some(&acting), &task), Access::Allow);
    }

    #[test]
    fn non_owner_is_denied() {
        let acting = user(2);
        let task = task_owned_by(1);
        assert_eq!(
            authorize(Some(&acting), &task),
            Access::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn anonymous_is_always_denied() {
        let task = task_owned_by(1);
        assert_eq!(
            authorize(None, &task),
            Access::Deny(DenyReason::NotAuthenticated)
        );
    }

    #[test]
    fn user_owns_itself() {
        let acting = user(3);
        let target = user(3);
        assert_eq!(authorize(Some(&acting), &target), Access::Allow);

        let other = user(4);
        assert_eq!(
            authorize(Some(&other), &target),
            Access::Deny(DenyReason::NotOwner)
        );
    }
}
