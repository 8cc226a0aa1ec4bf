//! Search input with a click-to-open suggestion panel.
//!
//! Clicking the input opens the panel, clicking a suggestion fills the
//! input and closes it, clicking anywhere else closes it (an invisible
//! backdrop catches the outside click).

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Service-name search box for the navbar.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let services = LocalResource::new(|| crate::net::api::fetch_services());

    let open = move || ui.get().search_open;

    view! {
        <div class="search-box">
            <input
                class="search-box__input"
                type="text"
                placeholder="Search services"
                prop:value=move || ui.get().search_query
                on:input=move |ev| ui.update(|u| u.search_query = event_target_value(&ev))
                on:click=move |ev| {
                    ev.stop_propagation();
                    ui.update(UiState::open_search);
                }
            />
            <Show when=open>
                <div
                    class="search-box__backdrop"
                    on:click=move |_| ui.update(UiState::close_search)
                ></div>
                <div class="search-box__panel" on:click=|ev| ev.stop_propagation()>
                    <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                        {move || {
                            services
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|s| {
                                            let label = s.name.clone();
                                            view! {
                                                <button
                                                    class="search-box__item"
                                                    on:click=move |_| {
                                                        ui.update(|u| u.choose_search(s.name.clone()));
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </div>
            </Show>
        </div>
    }
}
