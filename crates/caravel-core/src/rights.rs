//! Rights and roles
//!
//! A [`Right`] is an atomic named permission tagged with a category. A
//! [`Role`] is a named bundle of rights. Roles are administrative reference
//! data: rarely mutated, queried constantly by the resolution engine.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a right
///
/// The platform grows new categories over time; downstream matches should
/// carry a wildcard arm.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightType {
    /// Rights evaluated against the supervisory hierarchy
    Supervision,
    /// Rights scoped to a fulfillment warehouse
    Fulfillment,
    /// Rights over order fulfillment workflows
    OrderFulfillment,
    /// Reporting rights
    Reports,
    /// Platform administration rights
    GeneralAdmin,
}

impl fmt::Display for RightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RightType::Supervision => "supervision",
            RightType::Fulfillment => "fulfillment",
            RightType::OrderFulfillment => "order-fulfillment",
            RightType::Reports => "reports",
            RightType::GeneralAdmin => "general-admin",
        };
        f.write_str(name)
    }
}

/// An atomic named permission
///
/// Identity is the (name, type) pair. Rights are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Right {
    /// Unique right name
    pub name: String,
    /// Category of this right
    pub right_type: RightType,
}

impl Right {
    /// Create a new right
    pub fn new(name: impl Into<String>, right_type: RightType) -> Self {
        Self {
            name: name.into(),
            right_type,
        }
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.right_type)
    }
}

/// A named bundle of rights
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role name
    pub name: String,
    rights: IndexSet<Right>,
}

impl Role {
    /// Create a new role holding a single right
    pub fn new(name: impl Into<String>, right: Right) -> Self {
        let mut rights = IndexSet::new();
        rights.insert(right);
        Self {
            name: name.into(),
            rights,
        }
    }

    /// Create a new role from a collection of rights
    pub fn with_rights(name: impl Into<String>, rights: impl IntoIterator<Item = Right>) -> Self {
        Self {
            name: name.into(),
            rights: rights.into_iter().collect(),
        }
    }

    /// Add a right to this role
    pub fn add_right(&mut self, right: Right) {
        self.rights.insert(right);
    }

    /// Whether this role carries a right with the given right's name
    ///
    /// Membership is by name: two rights with the same name are the same
    /// grant even if their recorded categories differ.
    pub fn contains(&self, right: &Right) -> bool {
        self.rights.iter().any(|r| r.name == right.name)
    }

    /// The rights in this role
    pub fn rights(&self) -> impl Iterator<Item = &Right> {
        self.rights.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_contains_right_by_name() {
        let role = Role::new("storeroom", Right::new("inventory.view", RightType::Supervision));

        assert!(role.contains(&Right::new("inventory.view", RightType::Supervision)));
        // Same name, different category still counts as membership.
        assert!(role.contains(&Right::new("inventory.view", RightType::Reports)));
        assert!(!role.contains(&Right::new("inventory.adjust", RightType::Supervision)));
    }

    #[test]
    fn role_deduplicates_rights() {
        let right = Right::new("orders.approve", RightType::Supervision);
        let mut role = Role::new("approver", right.clone());
        role.add_right(right);

        assert_eq!(role.rights().count(), 1);
    }

    #[test]
    fn right_identity_is_name_and_type() {
        let a = Right::new("orders.view", RightType::Reports);
        let b = Right::new("orders.view", RightType::Supervision);

        assert_ne!(a, b);
        assert_eq!(a, Right::new("orders.view", RightType::Reports));
    }
}
