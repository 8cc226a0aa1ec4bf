use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_search_closed() {
    let state = UiState::default();
    assert!(!state.search_open);
    assert_eq!(state.search_query, "");
}

#[test]
fn ui_state_default_panes_are_overview() {
    let state = UiState::default();
    assert_eq!(state.profile_pane, ProfilePane::Overview);
    assert_eq!(state.address_pane, AddressPane::Overview);
}

// =============================================================
// Search box toggle
// =============================================================

#[test]
fn open_then_close_search() {
    let mut state = UiState::default();
    state.open_search();
    assert!(state.search_open);
    state.close_search();
    assert!(!state.search_open);
}

#[test]
fn choosing_a_suggestion_fills_and_closes() {
    let mut state = UiState::default();
    state.open_search();
    state.choose_search("Deep cleaning".to_owned());
    assert_eq!(state.search_query, "Deep cleaning");
    assert!(!state.search_open);
}

#[test]
fn closing_preserves_the_query() {
    let mut state = UiState::default();
    state.search_query = "plumb".to_owned();
    state.open_search();
    state.close_search();
    assert_eq!(state.search_query, "plumb");
}

// =============================================================
// Pane enums
// =============================================================

#[test]
fn profile_pane_variants_are_distinct() {
    assert_ne!(ProfilePane::Overview, ProfilePane::EditDetails);
    assert_ne!(ProfilePane::Overview, ProfilePane::ChangePassword);
    assert_ne!(ProfilePane::EditDetails, ProfilePane::ChangePassword);
}

#[test]
fn address_pane_variants_are_distinct() {
    assert_ne!(AddressPane::Overview, AddressPane::Saved);
    assert_ne!(AddressPane::Overview, AddressPane::New);
    assert_ne!(AddressPane::Saved, AddressPane::New);
}

#[test]
fn selecting_a_pane_replaces_the_previous_one() {
    let mut state = UiState::default();
    state.profile_pane = ProfilePane::EditDetails;
    state.profile_pane = ProfilePane::ChangePassword;
    assert_eq!(state.profile_pane, ProfilePane::ChangePassword);
}
