#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the search box and the page-level visibility toggles.
///
/// Mutually exclusive panes are enums rather than per-element booleans, so
/// showing one pane structurally hides the others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub search_open: bool,
    pub search_query: String,
    pub profile_pane: ProfilePane,
    pub address_pane: AddressPane,
}

impl UiState {
    /// Open the search suggestion panel.
    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    /// Close the search suggestion panel without touching the query.
    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    /// Accept a suggestion: fill the input and close the panel.
    pub fn choose_search(&mut self, suggestion: String) {
        self.search_query = suggestion;
        self.search_open = false;
    }
}

/// Which profile-page pane is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfilePane {
    /// Account card plus wishlist/order rows.
    #[default]
    Overview,
    EditDetails,
    ChangePassword,
}

/// Which address-page section is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressPane {
    #[default]
    Overview,
    Saved,
    New,
}
