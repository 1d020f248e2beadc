//! The supervisory-node hierarchy
//!
//! A read-mostly tree of approval levels. Each node optionally links one
//! requisition group aggregating member facilities and program schedules;
//! traversal computes the transitive set of facilities and programs a node
//! effectively supervises.

mod arena;
mod node;
mod traversal;

pub use arena::SupervisoryHierarchy;
pub use node::{RequisitionGroup, RequisitionGroupProgramSchedule, SupervisoryNode};
pub use traversal::SupervisionReach;
