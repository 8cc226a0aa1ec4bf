//! Scroll-arrow math for horizontal item rows.
//!
//! Rows scroll by a fixed step per arrow click; an arrow dims when its
//! direction has no further content. The math is pure; only reading the
//! metrics off a DOM element requires a browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Pixels scrolled per arrow click.
pub const SCROLL_STEP: i32 = 350;

const DIMMED_OPACITY: &str = "0.33";
const FULL_OPACITY: &str = "1";

/// Arrow presentation derived from a container's scroll metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowState {
    pub at_start: bool,
    pub at_end: bool,
}

impl ArrowState {
    pub fn from_metrics(scroll_left: i32, client_width: i32, scroll_width: i32) -> Self {
        Self {
            at_start: scroll_left <= 0,
            at_end: scroll_left + client_width >= scroll_width,
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn from_element(el: &web_sys::Element) -> Self {
        Self::from_metrics(el.scroll_left(), el.client_width(), el.scroll_width())
    }

    pub fn prev_opacity(&self) -> &'static str {
        if self.at_start { DIMMED_OPACITY } else { FULL_OPACITY }
    }

    pub fn next_opacity(&self) -> &'static str {
        if self.at_end { DIMMED_OPACITY } else { FULL_OPACITY }
    }
}

impl Default for ArrowState {
    /// A freshly rendered row sits at its origin.
    fn default() -> Self {
        Self {
            at_start: true,
            at_end: false,
        }
    }
}
