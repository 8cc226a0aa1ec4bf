//! Home page with the service catalog.

use leptos::prelude::*;

use crate::components::service_card::ServiceCard;

/// Landing page — hero banner plus the service catalog grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let services = LocalResource::new(|| crate::net::api::fetch_services());

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Frenzy"</h1>
                <p>"Household services, booked in minutes."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="home-page__empty">"No services available right now."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="home-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|s| view! { <ServiceCard service=s/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
