//! Authorization error handling
//!
//! A denial is the only user-facing failure this crate raises. Collaborator
//! misses (unknown users, unknown rights, dangling node references) never
//! surface as distinct errors: they make the affected check non-matching.

use serde::{Deserialize, Serialize};

/// Error raised when an authorization check denies the caller
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AuthorizationError {
    /// The caller lacks the required right or cannot be resolved to a user
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Description of the denied check
        message: String,
    },
}

impl AuthorizationError {
    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
}

/// Standard Result type for authorization checks
pub type Result<T> = std::result::Result<T, AuthorizationError>;
