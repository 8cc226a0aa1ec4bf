//! Post-navigation presentation surface.
//!
//! The guard never touches the document directly; it writes through a
//! [`PresentationSink`] supplied by the host environment. The browser
//! implementation updates the document title and the meta-description
//! tag, and is a silent no-op when either is unavailable.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use std::sync::Arc;

/// Host-supplied surface for document metadata updates.
pub trait PresentationSink: Send + Sync {
    /// Overwrite the document title and meta description.
    fn apply(&self, title: &str, description: &str);
}

/// Shared sink handle stored in the reactive context.
pub type SharedSink = Arc<dyn PresentationSink>;

/// Browser sink writing `document.title` and the `content` attribute of
/// `head meta[name="description"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSink;

impl PresentationSink for DocumentSink {
    fn apply(&self, title: &str, description: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            doc.set_title(title);
            if let Ok(Some(el)) = doc.query_selector("head meta[name=\"description\"]") {
                let _ = el.set_attribute("content", description);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, description);
        }
    }
}
