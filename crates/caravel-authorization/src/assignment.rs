//! Role assignments and their evaluation
//!
//! An assignment binds a role to an optional scoping context and decides
//! locally whether it satisfies a [`RightQuery`]. The three kinds are a
//! closed sum: the domain enumerates exactly direct, supervision, and
//! fulfillment assignments.
//!
//! Scoping semantics for supervision assignments, spelled out because every
//! combination is reachable:
//!
//! | assignment program | query program | program dimension |
//! |---|---|---|
//! | none | none | matches |
//! | none | some | matches (assignment unscoped) |
//! | some | none | matches (only restricts specified queries) |
//! | some `a` | some `q` | matches iff `a == q` |
//!
//! The facility dimension is governed by the node: an unscoped query always
//! passes; with a node set, the query facility must lie in the node's
//! supervision reach; with no node (a home-facility assignment), the query
//! facility must be the user's home facility.

use crate::query::RightQuery;
use caravel_core::{Facility, Program, Role, SupervisoryHierarchy, SupervisoryNodeId};
use serde::{Deserialize, Serialize};

/// Explicit evaluation context for assignment checks
///
/// Everything an assignment consults beyond its own fields is passed in
/// here; evaluation reads no ambient state.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// The supervisory hierarchy to traverse for node-scoped assignments
    pub hierarchy: &'a SupervisoryHierarchy,
    /// Home facility of the user under evaluation, if known
    pub home_facility: Option<&'a Facility>,
}

impl<'a> ResolutionContext<'a> {
    /// Create a context with no home facility
    pub fn new(hierarchy: &'a SupervisoryHierarchy) -> Self {
        Self {
            hierarchy,
            home_facility: None,
        }
    }

    /// Attach the user's home facility
    pub fn with_home_facility(mut self, facility: &'a Facility) -> Self {
        self.home_facility = Some(facility);
        self
    }
}

/// A binding of a role to a user, with optional scoping context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    /// Unscoped assignment; the role's rights hold everywhere
    Direct {
        /// The assigned role
        role: Role,
    },
    /// Assignment evaluated against programs and the supervisory hierarchy
    Supervision {
        /// The assigned role
        role: Role,
        /// Program this assignment is scoped to, if any
        program: Option<Program>,
        /// Node whose subtree this assignment supervises; `None` means the
        /// user's home facility
        node: Option<SupervisoryNodeId>,
    },
    /// Assignment scoped to a single fulfillment warehouse
    Fulfillment {
        /// The assigned role
        role: Role,
        /// The warehouse this assignment covers
        warehouse: Facility,
    },
}

impl RoleAssignment {
    /// Create a direct assignment
    pub fn direct(role: Role) -> Self {
        Self::Direct { role }
    }

    /// Create a home-facility supervision assignment
    pub fn home_supervision(role: Role, program: Option<Program>) -> Self {
        Self::Supervision {
            role,
            program,
            node: None,
        }
    }

    /// Create a node-scoped supervision assignment
    pub fn supervision(role: Role, program: Option<Program>, node: SupervisoryNodeId) -> Self {
        Self::Supervision {
            role,
            program,
            node: Some(node),
        }
    }

    /// Create a fulfillment assignment
    pub fn fulfillment(role: Role, warehouse: Facility) -> Self {
        Self::Fulfillment { role, warehouse }
    }

    /// The assigned role
    pub fn role(&self) -> &Role {
        match self {
            Self::Direct { role }
            | Self::Supervision { role, .. }
            | Self::Fulfillment { role, .. } => role,
        }
    }

    /// Whether this assignment satisfies the query
    ///
    /// Pure and side-effect free; a dangling node reference simply fails to
    /// supervise anything.
    pub fn has_right(&self, query: &RightQuery, ctx: &ResolutionContext<'_>) -> bool {
        match self {
            Self::Direct { role } => role.contains(&query.right),
            Self::Fulfillment { role, warehouse } => {
                // A query lacking a facility never matches a warehouse scope.
                role.contains(&query.right) && query.facility.as_ref() == Some(warehouse)
            }
            Self::Supervision {
                role,
                program,
                node,
            } => {
                role.contains(&query.right)
                    && program_dimension_matches(program.as_ref(), query.program.as_ref())
                    && facility_dimension_matches(*node, query, ctx)
            }
        }
    }
}

/// Symmetric wildcard match on the program dimension
fn program_dimension_matches(assigned: Option<&Program>, queried: Option<&Program>) -> bool {
    match (assigned, queried) {
        (Some(assigned), Some(queried)) => assigned == queried,
        _ => true,
    }
}

fn facility_dimension_matches(
    node: Option<SupervisoryNodeId>,
    query: &RightQuery,
    ctx: &ResolutionContext<'_>,
) -> bool {
    let Some(facility) = &query.facility else {
        return true;
    };
    match node {
        Some(node) => ctx
            .hierarchy
            .supervises_facility(node, facility, query.program.as_ref()),
        None => ctx.home_facility == Some(facility),
    }
}
