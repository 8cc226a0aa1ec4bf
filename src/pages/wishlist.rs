//! Wishlist page.

use leptos::prelude::*;

use crate::components::scroll_row::ScrollRow;

/// Wishlist page — a scrollable row of saved services.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::api::fetch_wishlist());

    view! {
        <div class="wishlist-page">
            <ScrollRow title="Your wishlist">
                <Suspense fallback=move || view! { <p>"Loading wishlist..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="wishlist-page__empty">"Nothing saved yet."</p>
                                    }
                                        .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="wishlist-page__card">
                                                    <span>{item.name}</span>
                                                    <span>
                                                        {format!("\u{20b9}{:.2}", item.base_price)}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </ScrollRow>
        </div>
    }
}
