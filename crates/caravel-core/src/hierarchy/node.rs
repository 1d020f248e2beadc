//! Supervisory nodes and requisition groups
//!
//! A supervisory node is one level in the approval hierarchy. It may be
//! linked to at most one requisition group, which aggregates the member
//! facilities requisitioning through that level and the program schedules
//! the group runs. The group value is owned by its node, so the "one group
//! per node, one node per group" invariant holds structurally.

use crate::facility::Facility;
use crate::identifiers::{ProgramCode, SupervisoryNodeId};
use crate::program::{ProcessingSchedule, Program};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Association between a requisition group, a program, and its schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionGroupProgramSchedule {
    /// Program the group requisitions for
    pub program: Program,
    /// Cadence the program runs on within this group
    pub schedule: ProcessingSchedule,
    /// Whether stock is delivered directly to member facilities
    pub direct_delivery: bool,
}

impl RequisitionGroupProgramSchedule {
    /// Create a new program schedule entry
    pub fn new(program: Program, schedule: ProcessingSchedule, direct_delivery: bool) -> Self {
        Self {
            program,
            schedule,
            direct_delivery,
        }
    }
}

/// A named group of facilities requisitioning through one supervisory node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionGroup {
    /// Unique group code
    pub code: String,
    /// Display name
    pub name: String,
    /// Facilities requisitioning through this group
    member_facilities: IndexSet<Facility>,
    /// Program schedule entries, in administrative order
    program_schedules: Vec<RequisitionGroupProgramSchedule>,
}

impl RequisitionGroup {
    /// Create a new empty requisition group
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            member_facilities: IndexSet::new(),
            program_schedules: Vec::new(),
        }
    }

    /// Replace the member facilities
    pub fn with_members(mut self, members: impl IntoIterator<Item = Facility>) -> Self {
        self.member_facilities = members.into_iter().collect();
        self
    }

    /// Add a member facility
    pub fn add_member(&mut self, facility: Facility) {
        self.member_facilities.insert(facility);
    }

    /// Add a program schedule entry
    pub fn add_schedule(&mut self, entry: RequisitionGroupProgramSchedule) {
        self.program_schedules.push(entry);
    }

    /// Append a program schedule entry, builder-style
    pub fn with_schedule(mut self, entry: RequisitionGroupProgramSchedule) -> Self {
        self.program_schedules.push(entry);
        self
    }

    /// The member facilities of this group
    pub fn member_facilities(&self) -> impl Iterator<Item = &Facility> {
        self.member_facilities.iter()
    }

    /// The program schedule entries of this group
    pub fn program_schedules(&self) -> &[RequisitionGroupProgramSchedule] {
        &self.program_schedules
    }

    /// Whether this group runs a schedule for the given program
    pub fn supports_program(&self, program: &ProgramCode) -> bool {
        self.program_schedules
            .iter()
            .any(|entry| entry.program.code == *program)
    }
}

/// One level in the supervisory hierarchy
///
/// The parent relation is recorded as an ID back-reference; a node never
/// owns its parent. Children are derived by the hierarchy's reverse index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisoryNode {
    /// Stable node identifier
    pub id: SupervisoryNodeId,
    /// Unique node code
    pub code: String,
    /// Display name
    pub name: Option<String>,
    /// Facility this node sits at, if any
    pub facility: Option<Facility>,
    pub(crate) parent: Option<SupervisoryNodeId>,
    pub(crate) requisition_group: Option<RequisitionGroup>,
}

impl SupervisoryNode {
    /// Create a new root node with a fresh identifier
    pub fn new(code: impl Into<String>, facility: Option<Facility>) -> Self {
        Self {
            id: SupervisoryNodeId::new(),
            code: code.into(),
            name: None,
            facility,
            parent: None,
            requisition_group: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Record a parent reference on a detached node
    ///
    /// Used when reconstructing persisted nodes for a bulk load; inside a
    /// [`super::SupervisoryHierarchy`] the validated edit path is
    /// `set_parent`.
    pub fn with_parent(mut self, parent: SupervisoryNodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The parent node ID, if this node is not a root
    pub fn parent(&self) -> Option<SupervisoryNodeId> {
        self.parent
    }

    /// The requisition group linked to this node, if any
    pub fn requisition_group(&self) -> Option<&RequisitionGroup> {
        self.requisition_group.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_supports_scheduled_programs_only() {
        let group = RequisitionGroup::new("DG", "District Group").with_schedule(
            RequisitionGroupProgramSchedule::new(
                Program::new("EM"),
                ProcessingSchedule::new("monthly"),
                false,
            ),
        );

        assert!(group.supports_program(&"EM".into()));
        assert!(!group.supports_program(&"VAX".into()));
    }

    #[test]
    fn group_members_deduplicate() {
        let mut group = RequisitionGroup::new("DG", "District Group");
        group.add_member(Facility::new("C2"));
        group.add_member(Facility::new("C2").with_name("Clinic Two"));

        assert_eq!(group.member_facilities().count(), 1);
    }
}
