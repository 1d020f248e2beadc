//! Facilities and their operators
//!
//! A facility is any site that stores or dispenses stock: a warehouse, a
//! district store, a clinic. Identity is the business code; the descriptive
//! attributes exist for display and reporting and never influence rights
//! resolution.

use crate::identifiers::FacilityCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Organization operating a facility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityOperator {
    /// Unique operator code
    pub code: String,
    /// Display name
    pub name: Option<String>,
}

impl FacilityOperator {
    /// Create a new facility operator
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }
}

/// A stock-holding site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    /// Business code; the facility's identity
    pub code: FacilityCode,
    /// Display name
    pub name: Option<String>,
    /// Facility type code (warehouse, district store, clinic, ...)
    pub facility_type: Option<String>,
    /// Geographic zone code this facility sits in
    pub geographic_zone: Option<String>,
    /// Operating organization
    pub operator: Option<FacilityOperator>,
    /// Whether the facility is currently active
    pub active: bool,
}

impl Facility {
    /// Create a new active facility with the given code
    pub fn new(code: impl Into<FacilityCode>) -> Self {
        Self {
            code: code.into(),
            name: None,
            facility_type: None,
            geographic_zone: None,
            operator: None,
            active: true,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the facility type code
    pub fn with_facility_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = Some(facility_type.into());
        self
    }

    /// Set the geographic zone code
    pub fn with_geographic_zone(mut self, zone: impl Into<String>) -> Self {
        self.geographic_zone = Some(zone.into());
        self
    }

    /// Set the operating organization
    pub fn with_operator(mut self, operator: FacilityOperator) -> Self {
        self.operator = Some(operator);
        self
    }
}

// Identity is the code alone; two records for the same code are the same
// facility regardless of attribute drift.
impl PartialEq for Facility {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Facility {}

impl Hash for Facility {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.code, name),
            None => write!(f, "{}", self.code),
        }
    }
}
