//! Unified error type for reference data operations
//!
//! A single error enum covers every fallible edit to the reference data
//! graph. Query-time resolution never returns these: lookups that miss are
//! `Option`s, and traversal over malformed data truncates instead of failing.

use serde::{Deserialize, Serialize};

/// Unified error type for reference data edits
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum CoreError {
    /// Invalid input or state for an edit
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Referenced entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// An entity with the same identity already exists
    #[error("Duplicate: {message}")]
    Duplicate {
        /// Description of the conflicting identity
        message: String,
    },

    /// The edit would create a cycle in the supervisory hierarchy
    #[error("Cycle detected: {message}")]
    CycleDetected {
        /// Description of the offending edge
        message: String,
    },
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a duplicate identity error
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }

    /// Create a cycle detection error
    pub fn cycle(message: impl Into<String>) -> Self {
        Self::CycleDetected {
            message: message.into(),
        }
    }
}

/// Standard Result type for reference data edits
pub type Result<T> = std::result::Result<T, CoreError>;
