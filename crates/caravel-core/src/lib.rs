//! Caravel Core - Reference Data Foundation
//!
//! Domain types for the Caravel logistics platform: rights and roles,
//! facilities and programs, and the supervisory-node hierarchy with its
//! ascent/descent traversals. This crate holds only reference data and pure
//! algorithms; evaluation policy lives in `caravel-authorization`, and
//! persistence, HTTP, and authentication are external collaborators.

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// User, node, and business-code identifiers
pub mod identifiers;

/// Rights and roles
pub mod rights;

/// Facilities and their operators
pub mod facility;

/// Programs and processing schedules
pub mod program;

/// Supervisory-node hierarchy and traversal
pub mod hierarchy;

// === Public API Re-exports ===

pub use errors::{CoreError, Result};
pub use facility::{Facility, FacilityOperator};
pub use hierarchy::{
    RequisitionGroup, RequisitionGroupProgramSchedule, SupervisionReach, SupervisoryHierarchy,
    SupervisoryNode,
};
pub use identifiers::{FacilityCode, ProgramCode, SupervisoryNodeId, UserId};
pub use program::{ProcessingSchedule, Program};
pub use rights::{Right, RightType, Role};
