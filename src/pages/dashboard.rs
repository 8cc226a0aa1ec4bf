//! Account dashboard listing recent service requests.

use leptos::prelude::*;

use crate::net::types::Order;
use crate::state::auth::AuthState;

/// Dashboard page — greets the account and lists its service requests.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let orders = LocalResource::new(|| crate::net::api::fetch_orders());

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.username))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <a href="/statistics" class="btn">"View statistics"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "No orders yet. " <a href="/">"Browse services"</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="dashboard-page__orders">
                                        {list.into_iter().map(order_row).collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn order_row(order: Order) -> impl IntoView {
    let amount = order.total_amount.map(|a| format!("\u{20b9}{a:.2}"));
    view! {
        <li class="dashboard-page__order">
            <span class="dashboard-page__order-name">{order.service_name}</span>
            <span class="dashboard-page__order-date">{order.scheduled_date}</span>
            <span class="dashboard-page__order-status">{order.status}</span>
            {amount.map(|a| view! { <span class="dashboard-page__order-amount">{a}</span> })}
        </li>
    }
}
