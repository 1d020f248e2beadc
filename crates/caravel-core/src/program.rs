//! Programs and processing schedules
//!
//! A program is a stable scoping token (essential medicines, vaccines, ...)
//! used throughout rights resolution. Processing schedules describe the
//! requisition cadence a requisition group runs a program on.

use crate::identifiers::ProgramCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A health or logistics program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Business code; the program's identity
    pub code: ProgramCode,
    /// Display name
    pub name: Option<String>,
    /// Whether the program is currently active
    pub active: bool,
}

impl Program {
    /// Create a new active program with the given code
    pub fn new(code: impl Into<ProgramCode>) -> Self {
        Self {
            code: code.into(),
            name: None,
            active: true,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// Identity is the code alone.
impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Program {}

impl Hash for Program {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Requisition cadence for a program within a requisition group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessingSchedule {
    /// Unique schedule code
    pub code: String,
    /// Display name
    pub name: Option<String>,
}

impl ProcessingSchedule {
    /// Create a new processing schedule
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
