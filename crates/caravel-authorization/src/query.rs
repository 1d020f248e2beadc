//! Right queries
//!
//! A [`RightQuery`] is the immutable argument to every `has_right`
//! evaluation: the requested right plus optional program and facility
//! context. Equality and hashing cover all three fields so a query can key
//! a decision cache.

use caravel_core::{Facility, Program, Right};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to hold one right in an optional context
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RightQuery {
    /// The requested right
    pub right: Right,
    /// Program context, if the operation is program-scoped
    pub program: Option<Program>,
    /// Facility context, if the operation is facility-scoped
    pub facility: Option<Facility>,
}

impl RightQuery {
    /// Create an unscoped query for a right
    pub fn new(right: Right) -> Self {
        Self {
            right,
            program: None,
            facility: None,
        }
    }

    /// Scope the query to a program
    pub fn with_program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Scope the query to a facility
    pub fn with_facility(mut self, facility: Facility) -> Self {
        self.facility = Some(facility);
        self
    }
}

impl fmt::Display for RightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.right.name)?;
        if let Some(program) = &self.program {
            write!(f, " program={program}")?;
        }
        if let Some(facility) = &self.facility {
            write!(f, " facility={facility}")?;
        }
        Ok(())
    }
}
