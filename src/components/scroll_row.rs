//! Horizontally scrollable item row with prev/next arrow buttons.

use leptos::prelude::*;

use crate::util::scroll::{ArrowState, SCROLL_STEP};

/// A titled row of cards that scrolls by a fixed step per arrow click.
/// Arrows dim when their direction has no further content.
#[component]
pub fn ScrollRow(title: &'static str, children: Children) -> impl IntoView {
    let container: NodeRef<leptos::html::Div> = NodeRef::new();
    let arrows = RwSignal::new(ArrowState::default());

    let refresh = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container.get() {
                arrows.set(ArrowState::from_element(&el));
            }
        }
    };

    let scroll_by = move |step: i32| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container.get() {
                el.set_scroll_left(el.scroll_left() + step);
                arrows.set(ArrowState::from_element(&el));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = step;
        }
    };

    view! {
        <section class="scroll-row">
            <h2 class="scroll-row__title">{title}</h2>
            <div class="scroll-row__body">
                <button
                    class="scroll-row__arrow scroll-row__arrow--prev"
                    style:opacity=move || arrows.get().prev_opacity()
                    on:click=move |_| scroll_by(-SCROLL_STEP)
                >
                    "\u{2190}"
                </button>
                <div class="scroll-row__items" node_ref=container on:scroll=move |_| refresh()>
                    {children()}
                </div>
                <button
                    class="scroll-row__arrow scroll-row__arrow--next"
                    style:opacity=move || arrows.get().next_opacity()
                    on:click=move |_| scroll_by(SCROLL_STEP)
                >
                    "\u{2192}"
                </button>
            </div>
        </section>
    }
}
