use super::*;

fn user(role: Role, blocked: bool) -> User {
    User {
        id: 1,
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
        image_file: String::new(),
        is_blocked: blocked,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unloaded_and_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.phase, SessionPhase::Unloaded);
    assert!(!state.resolved());
    assert!(!state.is_authenticated());
}

// =============================================================
// Derivations
// =============================================================

#[test]
fn customer_is_authenticated_but_not_admin() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Customer, false));
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
    assert!(!state.is_blocked());
}

#[test]
fn professional_is_not_admin() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Professional, false));
    assert!(!state.is_admin());
}

#[test]
fn admin_is_admin() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Admin, false));
    assert!(state.is_admin());
}

#[test]
fn blocked_admin_is_both_admin_and_blocked() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Admin, true));
    assert!(state.is_admin());
    assert!(state.is_blocked());
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn load_applies_result_under_matching_epoch() {
    let mut state = AuthState::default();
    let epoch = state.begin_load();
    assert_eq!(state.phase, SessionPhase::Loading);

    state.finish_load(epoch, Some(user(Role::Customer, false)));
    assert!(state.resolved());
    assert!(state.is_authenticated());
}

#[test]
fn load_resolving_to_none_is_anonymous_but_resolved() {
    let mut state = AuthState::default();
    let epoch = state.begin_load();
    state.finish_load(epoch, None);
    assert!(state.resolved());
    assert!(!state.is_authenticated());
}

#[test]
fn stale_load_result_is_discarded() {
    let mut state = AuthState::default();
    let epoch = state.begin_load();

    // A sign-in lands while the fetch is still in flight.
    state.set_user(user(Role::Admin, false));

    state.finish_load(epoch, None);
    assert!(state.is_admin(), "stale anonymous result must not clobber the sign-in");
}

#[test]
fn finish_load_without_begin_is_ignored() {
    let mut state = AuthState::default();
    state.finish_load(0, Some(user(Role::Customer, false)));
    assert!(!state.resolved());
    assert!(state.user.is_none());
}

// =============================================================
// clear / invalidate
// =============================================================

#[test]
fn clear_resets_to_anonymous_resolved() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Customer, false));
    state.clear();
    assert!(state.user.is_none());
    assert!(state.resolved(), "clear must not trigger a re-fetch");
}

#[test]
fn invalidate_forces_refetch() {
    let mut state = AuthState::default();
    state.set_user(user(Role::Customer, false));
    state.invalidate();
    assert_eq!(state.phase, SessionPhase::Unloaded);
    assert!(state.user.is_none());
}

#[test]
fn explicit_mutations_advance_the_epoch() {
    let mut state = AuthState::default();
    let e0 = state.epoch;
    state.set_user(user(Role::Customer, false));
    let e1 = state.epoch;
    state.clear();
    let e2 = state.epoch;
    state.invalidate();
    let e3 = state.epoch;
    assert!(e0 < e1 && e1 < e2 && e2 < e3);
}

// =============================================================
// Password policy
// =============================================================

#[test]
fn password_policy_requires_eight_characters() {
    assert!(!password_meets_policy("short7!"));
    assert!(password_meets_policy("eight8ch"));
}
