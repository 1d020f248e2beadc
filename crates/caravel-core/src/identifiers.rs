//! Core identifier types used across the Caravel platform
//!
//! Entities with administrative identity (users, supervisory nodes) carry
//! UUID identifiers. Reference data keyed by business code (facilities,
//! programs) uses string code newtypes instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Unique identifier for a supervisory node
///
/// Node IDs are stable across hierarchy edits; the parent relation and the
/// children index both refer to nodes by this ID rather than by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupervisoryNodeId(pub Uuid);

impl SupervisoryNodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SupervisoryNodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SupervisoryNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

impl From<Uuid> for SupervisoryNodeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SupervisoryNodeId> for Uuid {
    fn from(id: SupervisoryNodeId) -> Self {
        id.0
    }
}

/// Business code identifying a facility
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacilityCode(pub String);

impl FacilityCode {
    /// Create a new facility code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FacilityCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for FacilityCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Business code identifying a program
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramCode(pub String);

impl ProgramCode {
    /// Create a new program code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for ProgramCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
