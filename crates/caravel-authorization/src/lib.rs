//! Caravel Authorization - Rights Resolution Engine
//!
//! Decides whether a user's role assignments grant a right in a requested
//! context: a program, a facility, or unscoped. Supervision-scoped
//! assignments consult the supervisory hierarchy from `caravel-core`;
//! everything else is local to the assignment. The engine is synchronous,
//! stateless per call, and reentrant — concurrent checks share only `&`
//! access to the read-mostly reference data graph.
//!
//! The caller identity and the hierarchy are explicit arguments throughout;
//! no ambient security context or global registry exists.

#![forbid(unsafe_code)]

/// Authorization error handling
pub mod errors;

/// Right queries
pub mod query;

/// Role assignments and their evaluation
pub mod assignment;

/// Users and their aggregation queries
pub mod user;

/// Caller identity
pub mod context;

/// Administrative right checks
pub mod service;

// === Public API Re-exports ===

pub use assignment::{ResolutionContext, RoleAssignment};
pub use context::CallerIdentity;
pub use errors::{AuthorizationError, Result};
pub use query::RightQuery;
pub use service::{AdminCheck, RightLookup, RightService, UserLookup};
pub use user::User;
