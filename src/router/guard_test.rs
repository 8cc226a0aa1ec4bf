use super::*;
use crate::net::types::{Role, User};
use crate::router::routes;

fn account(role: Role, blocked: bool) -> User {
    User {
        id: 1,
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
        image_file: String::new(),
        is_blocked: blocked,
    }
}

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    let epoch = state.begin_load();
    state.finish_load(epoch, None);
    state
}

fn signed_in(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.set_user(account(role, false));
    state
}

fn blocked(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.set_user(account(role, true));
    state
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_allow_any_session() {
    for session in [
        anonymous(),
        signed_in(Role::Customer),
        signed_in(Role::Professional),
        signed_in(Role::Admin),
    ] {
        assert_eq!(check(Access::Public, &session), Verdict::Allow);
    }
}

// =============================================================
// Authentication requirement
// =============================================================

#[test]
fn anonymous_session_is_sent_to_signin() {
    assert_eq!(
        check(Access::RequiresAuthenticated, &anonymous()),
        Verdict::Redirect("/signin")
    );
}

#[test]
fn any_signed_in_role_satisfies_authentication() {
    for role in [Role::Customer, Role::Professional, Role::Admin] {
        assert_eq!(
            check(Access::RequiresAuthenticated, &signed_in(role)),
            Verdict::Allow
        );
    }
}

// =============================================================
// Admin requirement
// =============================================================

#[test]
fn non_admin_is_sent_to_profile() {
    assert_eq!(
        check(Access::RequiresAdmin, &signed_in(Role::Customer)),
        Verdict::Redirect("/profile")
    );
    assert_eq!(
        check(Access::RequiresAdmin, &signed_in(Role::Professional)),
        Verdict::Redirect("/profile")
    );
}

#[test]
fn admin_passes_the_admin_check() {
    assert_eq!(
        check(Access::RequiresAdmin, &signed_in(Role::Admin)),
        Verdict::Allow
    );
}

#[test]
fn anonymous_visitor_on_an_admin_route_is_redirected() {
    assert_eq!(
        check(Access::RequiresAdmin, &anonymous()),
        Verdict::Redirect("/profile")
    );
}

// =============================================================
// Guest-only requirement
// =============================================================

#[test]
fn signed_in_session_is_kept_out_of_guest_routes() {
    for role in [Role::Customer, Role::Professional, Role::Admin] {
        assert_eq!(
            check(Access::RequiresGuestOnly, &signed_in(role)),
            Verdict::Redirect("/profile")
        );
    }
}

#[test]
fn anonymous_visitor_may_enter_guest_routes() {
    assert_eq!(check(Access::RequiresGuestOnly, &anonymous()), Verdict::Allow);
}

// =============================================================
// Blocked precedence
// =============================================================

#[test]
fn blocked_session_is_ejected_regardless_of_requirement() {
    for access in [
        Access::Public,
        Access::RequiresAuthenticated,
        Access::RequiresAdmin,
        Access::RequiresGuestOnly,
    ] {
        assert_eq!(check(access, &blocked(Role::Customer)), Verdict::Eject);
    }
}

#[test]
fn blocked_admin_is_ejected_even_where_admin_would_pass() {
    assert_eq!(
        check(Access::RequiresAdmin, &blocked(Role::Admin)),
        Verdict::Eject
    );
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn same_inputs_decide_the_same_way_twice() {
    let session = signed_in(Role::Customer);
    let first = check(Access::RequiresAdmin, &session);
    let second = check(Access::RequiresAdmin, &session);
    assert_eq!(first, second);
}

// =============================================================
// Scenarios from the route table
// =============================================================

#[test]
fn scenario_anonymous_to_profile() {
    assert_eq!(
        check(routes::PROFILE.access, &anonymous()),
        Verdict::Redirect(routes::SIGNIN_PATH)
    );
}

#[test]
fn scenario_customer_to_service_add() {
    assert_eq!(
        check(routes::SERVICE_ADD.access, &signed_in(Role::Customer)),
        Verdict::Redirect(routes::PROFILE_PATH)
    );
}

#[test]
fn scenario_blocked_admin_to_dashboard() {
    let mut session = blocked(Role::Admin);
    assert_eq!(check(routes::DASHBOARD.access, &session), Verdict::Eject);

    // The eject clears the session; the visitor is anonymous afterwards.
    session.clear();
    assert!(!session.is_authenticated());
    assert!(session.resolved());
}

#[test]
fn scenario_customer_to_signin() {
    assert_eq!(
        check(routes::SIGNIN.access, &signed_in(Role::Customer)),
        Verdict::Redirect(routes::PROFILE_PATH)
    );
}

#[test]
fn scenario_unloaded_session_resolves_then_home_allows() {
    let mut session = AuthState::default();
    assert!(!session.resolved(), "no decision before the fetch resolves");

    let epoch = session.begin_load();
    session.finish_load(epoch, None);
    assert_eq!(check(routes::HOME.access, &session), Verdict::Allow);
}

// =============================================================
// Failure degradation
// =============================================================

#[test]
fn failed_fetch_routes_like_an_anonymous_visitor() {
    // A transport failure resolves the session to anonymous; the same
    // requirement checks apply as for a visitor who was never signed in.
    let session = anonymous();
    assert_eq!(check(routes::HOME.access, &session), Verdict::Allow);
    assert_eq!(
        check(routes::CART.access, &session),
        Verdict::Redirect(routes::SIGNIN_PATH)
    );
}
