use super::*;

// =============================================================
// Table invariants
// =============================================================

#[test]
fn paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path, "duplicate path {}", a.path);
        }
    }
}

#[test]
fn names_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.name, b.name, "duplicate name {}", a.name);
        }
    }
}

#[test]
fn every_path_resolves_back_to_its_route() {
    for route in &ROUTES {
        let found = by_path(route.path).expect("path must resolve");
        assert_eq!(found.name, route.name);
    }
}

#[test]
fn unknown_path_does_not_resolve() {
    assert!(by_path("/nope").is_none());
}

// =============================================================
// Access assignments
// =============================================================

#[test]
fn public_routes() {
    for route in [&HOME, &ABOUT, &CONTACT] {
        assert_eq!(route.access, Access::Public, "{}", route.name);
    }
}

#[test]
fn guest_only_routes() {
    for route in [&SIGNIN, &SIGNUP] {
        assert_eq!(route.access, Access::RequiresGuestOnly, "{}", route.name);
    }
}

#[test]
fn admin_routes() {
    for route in [&SERVICE_ADD, &SERVICE_EDIT] {
        assert_eq!(route.access, Access::RequiresAdmin, "{}", route.name);
    }
}

#[test]
fn account_routes_require_authentication() {
    for route in [
        &DASHBOARD,
        &PROFILE,
        &CART,
        &ADDRESS,
        &PAYMENT,
        &CONFIRM_ORDER,
        &REVIEW,
        &WISHLIST,
        &STATISTICS,
    ] {
        assert_eq!(route.access, Access::RequiresAuthenticated, "{}", route.name);
    }
}

#[test]
fn redirect_targets_are_real_routes() {
    assert!(by_path(SIGNIN_PATH).is_some());
    assert!(by_path(PROFILE_PATH).is_some());
    assert!(by_path(ROOT_PATH).is_some());
}

// =============================================================
// Display metadata
// =============================================================

#[test]
fn declared_metadata_is_used() {
    assert_eq!(HOME.display_title(), "Household Services -Frenzy");
    assert_eq!(
        HOME.display_description(),
        "Home page of Frenzy the household services app"
    );
}

#[test]
fn missing_metadata_falls_back_to_defaults() {
    let bare = RouteMeta {
        path: "/bare",
        name: "bare",
        title: None,
        description: None,
        access: Access::Public,
    };
    assert_eq!(bare.display_title(), DEFAULT_TITLE);
    assert_eq!(bare.display_description(), DEFAULT_DESCRIPTION);
}
