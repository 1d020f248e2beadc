//! Ascent and descent over the supervisory hierarchy
//!
//! Ascent answers "is node N an ancestor of node M" by following parent
//! references. Descent computes the transitive supervision reach of a node:
//! every facility and program aggregated by requisition groups anywhere in
//! its subtree. Both walks are visited-set guarded; a revisit means the
//! persisted graph is malformed, and the walk truncates with a warning
//! rather than failing the request.

use super::arena::SupervisoryHierarchy;
use crate::facility::Facility;
use crate::identifiers::SupervisoryNodeId;
use crate::program::Program;
use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};

/// Facilities and programs reachable by descent from one node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupervisionReach {
    /// Member facilities of every requisition group in the subtree
    pub facilities: IndexSet<Facility>,
    /// Programs scheduled by those groups
    pub programs: IndexSet<Program>,
}

impl SupervisoryHierarchy {
    /// Whether `ancestor` lies on the parent chain of `node`
    ///
    /// A node is not its own ancestor. Unknown IDs and dangling parent
    /// references terminate the walk with `false`.
    pub fn is_ancestor(&self, ancestor: SupervisoryNodeId, node: SupervisoryNodeId) -> bool {
        let mut visited = HashSet::new();
        let mut current = self.node(node).and_then(|n| n.parent());
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            if !visited.insert(id) {
                tracing::warn!(start = %node, node = %id, "cycle in supervisory parent chain, truncating ascent");
                return false;
            }
            current = self.node(id).and_then(|n| n.parent());
        }
        false
    }

    /// Compute the supervision reach of a node
    ///
    /// Breadth-first descent over the children index starting at `start`,
    /// visiting every reachable node once. At each node with a requisition
    /// group: with no `program` filter the group contributes its member
    /// facilities and every scheduled program; with a filter it contributes
    /// only when it runs a schedule for that program. An unknown `start`
    /// yields the empty reach.
    pub fn supervision_reach(
        &self,
        start: SupervisoryNodeId,
        program: Option<&Program>,
    ) -> SupervisionReach {
        let mut reach = SupervisionReach::default();
        if self.node(start).is_none() {
            tracing::debug!(node = %start, "supervision reach requested for unknown node");
            return reach;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                tracing::warn!(start = %start, node = %id, "revisit during supervisory descent, truncating");
                continue;
            }
            let Some(node) = self.node(id) else {
                // Dangling child reference; contributes nothing.
                continue;
            };
            if let Some(group) = node.requisition_group() {
                match program {
                    None => {
                        reach.facilities.extend(group.member_facilities().cloned());
                        reach
                            .programs
                            .extend(group.program_schedules().iter().map(|s| s.program.clone()));
                    }
                    Some(program) if group.supports_program(&program.code) => {
                        reach.facilities.extend(group.member_facilities().cloned());
                        reach.programs.insert(program.clone());
                    }
                    Some(_) => {}
                }
            }
            queue.extend(self.children(id).iter().copied());
        }
        reach
    }

    /// Whether a facility is inside the supervision reach of `start`
    pub fn supervises_facility(
        &self,
        start: SupervisoryNodeId,
        facility: &Facility,
        program: Option<&Program>,
    ) -> bool {
        self.supervision_reach(start, program)
            .facilities
            .contains(facility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::node::{
        RequisitionGroup, RequisitionGroupProgramSchedule, SupervisoryNode,
    };
    use crate::program::ProcessingSchedule;

    fn scheduled_group(code: &str, program: &Program, members: &[&str]) -> RequisitionGroup {
        RequisitionGroup::new(code, format!("{code} group"))
            .with_members(members.iter().map(|c| Facility::new(*c)))
            .with_schedule(RequisitionGroupProgramSchedule::new(
                program.clone(),
                ProcessingSchedule::new("monthly"),
                false,
            ))
    }

    /// District node under province node; district group holds C2, province
    /// group holds C4 and C5, both scheduled for the same program.
    fn district_province(program: &Program) -> (SupervisoryHierarchy, SupervisoryNodeId) {
        let mut hierarchy = SupervisoryHierarchy::new();
        let province = hierarchy
            .insert_node(SupervisoryNode::new("PN", Some(Facility::new("C3"))))
            .unwrap();
        let district = hierarchy
            .insert_node(SupervisoryNode::new("DN", Some(Facility::new("C1"))))
            .unwrap();
        hierarchy.set_parent(district, Some(province)).unwrap();
        hierarchy
            .attach_requisition_group(district, scheduled_group("DG", program, &["C2"]))
            .unwrap();
        hierarchy
            .attach_requisition_group(province, scheduled_group("PG", program, &["C4", "C5"]))
            .unwrap();
        (hierarchy, province)
    }

    #[test]
    fn ascent_finds_ancestors_only_upward() {
        let program = Program::new("EM");
        let (hierarchy, province) = district_province(&program);
        let district = hierarchy.node_by_code("DN").unwrap().id;

        assert!(hierarchy.is_ancestor(province, district));
        assert!(!hierarchy.is_ancestor(district, province));
        assert!(!hierarchy.is_ancestor(province, province));
    }

    #[test]
    fn descent_unions_subtree_groups() {
        let program = Program::new("EM");
        let (hierarchy, province) = district_province(&program);

        let reach = hierarchy.supervision_reach(province, Some(&program));
        let codes: Vec<_> = reach.facilities.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(reach.facilities.len(), 3);
        assert!(codes.contains(&"C2") && codes.contains(&"C4") && codes.contains(&"C5"));
        assert_eq!(reach.programs.len(), 1);
    }

    #[test]
    fn descent_skips_groups_without_matching_schedule() {
        let program = Program::new("EM");
        let (hierarchy, province) = district_province(&program);

        let reach = hierarchy.supervision_reach(province, Some(&Program::new("VAX")));
        assert!(reach.facilities.is_empty());
        assert!(reach.programs.is_empty());
    }

    #[test]
    fn descent_without_filter_collects_all_programs() {
        let em = Program::new("EM");
        let (mut hierarchy, province) = district_province(&em);
        let extra = hierarchy
            .insert_node(SupervisoryNode::new("ZN", None))
            .unwrap();
        hierarchy.set_parent(extra, Some(province)).unwrap();
        hierarchy
            .attach_requisition_group(extra, scheduled_group("ZG", &Program::new("VAX"), &["C9"]))
            .unwrap();

        let reach = hierarchy.supervision_reach(province, None);
        assert_eq!(reach.facilities.len(), 4);
        assert_eq!(reach.programs.len(), 2);
    }

    #[test]
    fn descent_from_unknown_node_is_empty() {
        let hierarchy = SupervisoryHierarchy::new();
        let reach = hierarchy.supervision_reach(SupervisoryNodeId::new(), None);
        assert!(reach.facilities.is_empty());
    }

    #[test]
    fn malformed_parent_cycle_truncates() {
        // Build a two-node parent cycle through the tolerant bulk-load path.
        let mut a = SupervisoryNode::new("A", None);
        let mut b = SupervisoryNode::new("B", None);
        a.parent = Some(b.id);
        b.parent = Some(a.id);
        let (a_id, b_id) = (a.id, b.id);
        let hierarchy = SupervisoryHierarchy::from_nodes([a, b]);

        // Ascent terminates despite the cycle.
        assert!(hierarchy.is_ancestor(b_id, a_id));
        assert!(!hierarchy.is_ancestor(SupervisoryNodeId::new(), a_id));

        // Descent visits each node once and terminates.
        let reach = hierarchy.supervision_reach(a_id, None);
        assert!(reach.facilities.is_empty());
    }

    #[test]
    fn supervises_facility_checks_membership() {
        let program = Program::new("EM");
        let (hierarchy, province) = district_province(&program);

        assert!(hierarchy.supervises_facility(province, &Facility::new("C2"), Some(&program)));
        assert!(!hierarchy.supervises_facility(province, &Facility::new("C9"), Some(&program)));
        // The node's own facility is not supervised unless a group lists it.
        assert!(!hierarchy.supervises_facility(province, &Facility::new("C3"), Some(&program)));
    }
}
