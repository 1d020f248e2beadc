//! Caller identity
//!
//! The active caller is an explicit argument to every authorization check.
//! The web layer authenticates the request and hands the resolved identity
//! in; this crate only reads it.

use serde::{Deserialize, Serialize};

/// The authenticated caller of an authorization check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallerIdentity {
    /// A trusted service-level client with no end-user principal
    ServiceClient,
    /// An end-user principal
    User {
        /// Login name of the authenticated user
        username: String,
    },
}

impl CallerIdentity {
    /// Create an end-user identity
    pub fn user(username: impl Into<String>) -> Self {
        Self::User {
            username: username.into(),
        }
    }

    /// Whether the caller is a trusted service-level client
    pub fn is_service_client(&self) -> bool {
        matches!(self, Self::ServiceClient)
    }

    /// The end-user login name, if the caller is a user
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::User { username } => Some(username),
            Self::ServiceClient => None,
        }
    }
}
