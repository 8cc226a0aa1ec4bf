//! Five-star rating row driven by [`RatingState`].

use leptos::prelude::*;

use crate::state::review::RatingState;

/// Interactive star row. Hover previews, mouse-out reverts, click commits.
#[component]
pub fn StarRating(rating: RwSignal<RatingState>) -> impl IntoView {
    view! {
        <div class="star-rating" on:mouseleave=move |_| rating.update(RatingState::clear_preview)>
            {(0..RatingState::MAX_STARS)
                .map(|index| {
                    let class = move || {
                        if rating.get().is_lit(index) { "star star--active" } else { "star" }
                    };
                    view! {
                        <span
                            class=class
                            on:mouseenter=move |_| rating.update(|r| r.preview(index + 1))
                            on:click=move |_| rating.update(|r| r.commit(index + 1))
                        >
                            "\u{2605}"
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
