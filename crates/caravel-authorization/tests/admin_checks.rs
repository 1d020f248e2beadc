//! Administrative right check scenarios
//!
//! The service resolves callers through in-memory lookups; the trusted
//! client bypass, the self-service requester bypass, and the root-access
//! restriction are each pinned down here.

use assert_matches::assert_matches;
use caravel_authorization::{
    AdminCheck, AuthorizationError, CallerIdentity, RightService, RoleAssignment, User,
};
use caravel_core::{Right, RightType, Role, SupervisoryHierarchy, UserId};
use std::collections::HashMap;

const RIGHT_NAME: &str = "users.manage";

struct Fixture {
    service: RightService<HashMap<String, User>, HashMap<String, Right>>,
    hierarchy: SupervisoryHierarchy,
    admin_id: UserId,
    clerk_id: UserId,
}

/// Two known users: "admin" holds the administrative right, "clerk" holds
/// nothing.
fn fixture() -> Fixture {
    let right = Right::new(RIGHT_NAME, RightType::GeneralAdmin);

    let mut admin = User::new("admin");
    admin.assign_role(RoleAssignment::direct(Role::new(
        "administrator",
        right.clone(),
    )));
    let admin_id = admin.id();
    let clerk = User::new("clerk");
    let clerk_id = clerk.id();

    let mut users = HashMap::new();
    users.insert(admin.username.clone(), admin);
    users.insert(clerk.username.clone(), clerk);

    let mut rights = HashMap::new();
    rights.insert(right.name.clone(), right);

    Fixture {
        service: RightService::new(users, rights),
        hierarchy: SupervisoryHierarchy::new(),
        admin_id,
        clerk_id,
    }
}

#[test]
fn trusted_client_passes_by_default() {
    let f = fixture();
    let caller = CallerIdentity::ServiceClient;

    assert!(f
        .service
        .check_admin_right(&caller, RIGHT_NAME, &f.hierarchy)
        .is_ok());
}

#[test]
fn trusted_client_fails_when_service_tokens_are_disallowed() {
    let f = fixture();
    let caller = CallerIdentity::ServiceClient;

    let result = f.service.check_admin_right_with(
        &caller,
        RIGHT_NAME,
        AdminCheck::deny_service_token(),
        &f.hierarchy,
    );
    assert_matches!(result, Err(AuthorizationError::Unauthorized { .. }));
}

#[test]
fn user_with_the_right_passes() {
    let f = fixture();
    let caller = CallerIdentity::user("admin");

    assert!(f
        .service
        .check_admin_right(&caller, RIGHT_NAME, &f.hierarchy)
        .is_ok());
}

#[test]
fn user_without_the_right_fails() {
    let f = fixture();
    let caller = CallerIdentity::user("clerk");

    let result = f.service.check_admin_right(&caller, RIGHT_NAME, &f.hierarchy);
    assert_matches!(result, Err(AuthorizationError::Unauthorized { .. }));
}

#[test]
fn matching_requester_bypasses_the_right_check() {
    let f = fixture();
    // "clerk" does not hold the right but is acting on their own record.
    let caller = CallerIdentity::user("clerk");

    let result = f.service.check_admin_right_with(
        &caller,
        RIGHT_NAME,
        AdminCheck::default().with_requester(f.clerk_id),
        &f.hierarchy,
    );
    assert!(result.is_ok());
}

#[test]
fn non_matching_requester_does_not_bypass() {
    let f = fixture();
    let caller = CallerIdentity::user("clerk");

    let result = f.service.check_admin_right_with(
        &caller,
        RIGHT_NAME,
        AdminCheck::default().with_requester(f.admin_id),
        &f.hierarchy,
    );
    assert_matches!(result, Err(AuthorizationError::Unauthorized { .. }));
}

#[test]
fn unresolvable_user_fails() {
    let f = fixture();
    let caller = CallerIdentity::user("ghost");

    let result = f.service.check_admin_right(&caller, RIGHT_NAME, &f.hierarchy);
    assert_matches!(result, Err(AuthorizationError::Unauthorized { .. }));
}

#[test]
fn unknown_right_name_denies() {
    let f = fixture();
    let caller = CallerIdentity::user("admin");

    let result = f
        .service
        .check_admin_right(&caller, "no.such.right", &f.hierarchy);
    assert_matches!(result, Err(AuthorizationError::Unauthorized { .. }));
}

#[test]
fn root_access_allows_trusted_clients_only() {
    let f = fixture();

    assert!(f.service.check_root_access(&CallerIdentity::ServiceClient).is_ok());
    assert_matches!(
        f.service.check_root_access(&CallerIdentity::user("admin")),
        Err(AuthorizationError::Unauthorized { .. })
    );
}
