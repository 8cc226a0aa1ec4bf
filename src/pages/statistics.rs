//! Order statistics page.

use leptos::prelude::*;

/// Statistics page — aggregate order figures for the account.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let summary = LocalResource::new(|| crate::net::api::fetch_statistics());

    view! {
        <div class="statistics-page">
            <h1>"Your statistics"</h1>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|stats| match stats {
                            Some(s) => {
                                view! {
                                    <div class="statistics-page__tiles">
                                        <div class="statistics-page__tile">
                                            <span class="statistics-page__value">
                                                {s.total_requests}
                                            </span>
                                            <span class="statistics-page__caption">"Orders placed"</span>
                                        </div>
                                        <div class="statistics-page__tile">
                                            <span class="statistics-page__value">{s.completed}</span>
                                            <span class="statistics-page__caption">"Completed"</span>
                                        </div>
                                        <div class="statistics-page__tile">
                                            <span class="statistics-page__value">{s.pending}</span>
                                            <span class="statistics-page__caption">"Pending"</span>
                                        </div>
                                        <div class="statistics-page__tile">
                                            <span class="statistics-page__value">
                                                {format!("\u{20b9}{:.2}", s.total_spent)}
                                            </span>
                                            <span class="statistics-page__caption">"Total spent"</span>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="statistics-page__empty">"No statistics available."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
