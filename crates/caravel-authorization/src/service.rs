//! Administrative right checks
//!
//! [`RightService`] is the stateless facade administrative endpoints call
//! before acting. It resolves the caller to a user through read-only
//! collaborator lookups and evaluates the named right; every decision is
//! recomputed from the identity passed in, never cached.

use crate::context::CallerIdentity;
use crate::errors::{AuthorizationError, Result};
use crate::query::RightQuery;
use crate::user::User;
use caravel_core::{Right, SupervisoryHierarchy, UserId};
use std::collections::HashMap;

/// Read-only lookup of users by login name
pub trait UserLookup {
    /// Find a user by username; `None` when unknown
    fn find_by_username(&self, username: &str) -> Option<User>;
}

/// Read-only lookup of rights by name
pub trait RightLookup {
    /// Find a right by name; `None` when unknown
    fn find_by_name(&self, name: &str) -> Option<Right>;
}

impl UserLookup for HashMap<String, User> {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.get(username).cloned()
    }
}

impl RightLookup for HashMap<String, Right> {
    fn find_by_name(&self, name: &str) -> Option<Right> {
        self.get(name).cloned()
    }
}

/// Options for an administrative right check
#[derive(Debug, Clone, Copy)]
pub struct AdminCheck {
    /// Whether a trusted service-level client passes without a principal
    pub allow_service_token: bool,
    /// Grant without evaluating the right when the resolved user is this one
    pub requester: Option<UserId>,
}

impl Default for AdminCheck {
    fn default() -> Self {
        Self {
            allow_service_token: true,
            requester: None,
        }
    }
}

impl AdminCheck {
    /// Require an end-user principal even from trusted clients
    pub fn deny_service_token() -> Self {
        Self {
            allow_service_token: false,
            requester: None,
        }
    }

    /// Set the self-service requester ID
    pub fn with_requester(mut self, requester: UserId) -> Self {
        self.requester = Some(requester);
        self
    }
}

/// Stateless authorization facade over collaborator lookups
#[derive(Debug, Clone)]
pub struct RightService<U, R> {
    users: U,
    rights: R,
}

impl<U: UserLookup, R: RightLookup> RightService<U, R> {
    /// Create a service over the given lookups
    pub fn new(users: U, rights: R) -> Self {
        Self { users, rights }
    }

    /// Check that the caller holds an administrative right
    ///
    /// Trusted service-level clients pass by default; use
    /// [`check_admin_right_with`](Self::check_admin_right_with) to restrict
    /// them or to enable the self-service bypass.
    pub fn check_admin_right(
        &self,
        caller: &CallerIdentity,
        right_name: &str,
        hierarchy: &SupervisoryHierarchy,
    ) -> Result<()> {
        self.check_admin_right_with(caller, right_name, AdminCheck::default(), hierarchy)
    }

    /// Check an administrative right with explicit options
    pub fn check_admin_right_with(
        &self,
        caller: &CallerIdentity,
        right_name: &str,
        check: AdminCheck,
        hierarchy: &SupervisoryHierarchy,
    ) -> Result<()> {
        let username = match caller {
            CallerIdentity::ServiceClient => {
                if check.allow_service_token {
                    return Ok(());
                }
                tracing::debug!(right = right_name, "service token not allowed for check");
                return Err(AuthorizationError::unauthorized(format!(
                    "service-level token may not use {right_name}"
                )));
            }
            CallerIdentity::User { username } => username,
        };

        let user = self.users.find_by_username(username).ok_or_else(|| {
            AuthorizationError::unauthorized(format!("unknown user '{username}'"))
        })?;

        // Self-service carve-out: a user may always act on their own record.
        if check.requester.is_some_and(|requester| requester == user.id()) {
            return Ok(());
        }

        // An unknown right name is a right nobody holds.
        let denied = || {
            tracing::debug!(user = %username, right = right_name, "administrative right denied");
            AuthorizationError::unauthorized(format!(
                "user '{username}' lacks right '{right_name}'"
            ))
        };
        let right = self.rights.find_by_name(right_name).ok_or_else(denied)?;
        if user.has_right(&RightQuery::new(right), hierarchy) {
            Ok(())
        } else {
            Err(denied())
        }
    }

    /// Check that the caller is a trusted service-level client
    ///
    /// Root access is never granted to an end-user principal, whatever
    /// rights they hold.
    pub fn check_root_access(&self, caller: &CallerIdentity) -> Result<()> {
        match caller {
            CallerIdentity::ServiceClient => Ok(()),
            CallerIdentity::User { username } => {
                tracing::debug!(user = %username, "root access denied for end-user principal");
                Err(AuthorizationError::unauthorized(format!(
                    "root access is limited to service-level tokens, not user '{username}'"
                )))
            }
        }
    }
}
