//! Users and their aggregation queries
//!
//! A user owns its role assignments; an assignment has no identity outside
//! its user's collection. The aggregation queries union per-assignment
//! answers, so one dangling reference never poisons the result.

use crate::assignment::{ResolutionContext, RoleAssignment};
use crate::query::RightQuery;
use caravel_core::{Facility, Program, Right, SupervisoryHierarchy, UserId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A platform user with owned role assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    /// Unique login name
    pub username: String,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// The facility this user works from, if any
    pub home_facility: Option<Facility>,
    /// Whether the account is active
    pub active: bool,
    /// Whether the contact email was verified
    pub verified: bool,
    role_assignments: Vec<RoleAssignment>,
}

impl User {
    /// Create a new active user with a fresh identifier
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            first_name: None,
            last_name: None,
            email: None,
            home_facility: None,
            active: true,
            verified: false,
            role_assignments: Vec::new(),
        }
    }

    /// Use a specific identifier instead of a fresh one
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Set the given and family names
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    /// Set the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the home facility
    pub fn with_home_facility(mut self, facility: Facility) -> Self {
        self.home_facility = Some(facility);
        self
    }

    /// The user's identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Assign a role to this user
    pub fn assign_role(&mut self, assignment: RoleAssignment) {
        self.role_assignments.push(assignment);
    }

    /// The user's role assignments
    pub fn role_assignments(&self) -> &[RoleAssignment] {
        &self.role_assignments
    }

    fn resolution_context<'a>(
        &'a self,
        hierarchy: &'a SupervisoryHierarchy,
    ) -> ResolutionContext<'a> {
        ResolutionContext {
            hierarchy,
            home_facility: self.home_facility.as_ref(),
        }
    }

    /// Whether any assignment satisfies the query
    ///
    /// Short-circuits on the first match; no evaluation order is promised
    /// beyond "any".
    pub fn has_right(&self, query: &RightQuery, hierarchy: &SupervisoryHierarchy) -> bool {
        let ctx = self.resolution_context(hierarchy);
        self.role_assignments
            .iter()
            .any(|assignment| assignment.has_right(query, &ctx))
    }

    /// Programs of home-facility supervision assignments
    pub fn home_facility_programs(&self) -> IndexSet<Program> {
        self.role_assignments
            .iter()
            .filter_map(|assignment| match assignment {
                RoleAssignment::Supervision {
                    program: Some(program),
                    node: None,
                    ..
                } => Some(program.clone()),
                _ => None,
            })
            .collect()
    }

    /// Programs of program-scoped supervision assignments, node or not
    pub fn supervised_programs(&self) -> IndexSet<Program> {
        self.role_assignments
            .iter()
            .filter_map(|assignment| match assignment {
                RoleAssignment::Supervision {
                    program: Some(program),
                    ..
                } => Some(program.clone()),
                _ => None,
            })
            .collect()
    }

    /// Facilities supervised for a right and program
    ///
    /// Unions the supervision reach of every node-scoped supervision
    /// assignment whose role carries the right and whose program scope
    /// accepts the requested program. Assignments without a node contribute
    /// nothing here.
    pub fn supervised_facilities(
        &self,
        right: &Right,
        program: &Program,
        hierarchy: &SupervisoryHierarchy,
    ) -> IndexSet<Facility> {
        let mut facilities = IndexSet::new();
        for assignment in &self.role_assignments {
            if let RoleAssignment::Supervision {
                role,
                program: assigned,
                node: Some(node),
            } = assignment
            {
                let program_ok = assigned.as_ref().map_or(true, |a| a == program);
                if program_ok && role.contains(right) {
                    facilities.extend(hierarchy.supervision_reach(*node, Some(program)).facilities);
                }
            }
        }
        facilities
    }

    /// Warehouses of fulfillment assignments that hold the right there
    pub fn fulfillment_facilities(
        &self,
        right: &Right,
        hierarchy: &SupervisoryHierarchy,
    ) -> IndexSet<Facility> {
        let ctx = self.resolution_context(hierarchy);
        let mut facilities = IndexSet::new();
        for assignment in &self.role_assignments {
            if let RoleAssignment::Fulfillment { warehouse, .. } = assignment {
                let query = RightQuery::new(right.clone()).with_facility(warehouse.clone());
                if assignment.has_right(&query, &ctx) {
                    facilities.insert(warehouse.clone());
                }
            }
        }
        facilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::{RightType, Role};

    #[test]
    fn home_facility_programs_skip_node_scoped_assignments() {
        let right = Right::new("orders.approve", RightType::Supervision);
        let role = Role::new("approver", right);
        let mut user = User::new("kiende");
        user.assign_role(RoleAssignment::home_supervision(
            role.clone(),
            Some(Program::new("EM")),
        ));
        user.assign_role(RoleAssignment::home_supervision(role.clone(), None));
        user.assign_role(RoleAssignment::supervision(
            role,
            Some(Program::new("VAX")),
            caravel_core::SupervisoryNodeId::new(),
        ));

        let programs = user.home_facility_programs();
        assert_eq!(programs.len(), 1);
        assert!(programs.contains(&Program::new("EM")));

        let supervised = user.supervised_programs();
        assert_eq!(supervised.len(), 2);
    }

    #[test]
    fn assignments_are_owned_by_the_user() {
        let right = Right::new("reports.view", RightType::Reports);
        let mut user = User::new("kiende");
        user.assign_role(RoleAssignment::direct(Role::new("viewer", right)));

        assert_eq!(user.role_assignments().len(), 1);
    }
}
