//! Order confirmation page with a countdown redirect to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::checkout::Countdown;

/// Confirmation page — thanks the customer, shows the latest order, and
/// redirects to the dashboard once the countdown passes zero.
#[component]
pub fn ConfirmOrderPage() -> impl IntoView {
    let countdown = RwSignal::new(Countdown::default());
    let done = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                // The signal is disposed once the page unmounts; stop then.
                let Some(redirect) = countdown.try_update(Countdown::tick) else {
                    break;
                };
                if redirect {
                    let _ = done.try_set(true);
                    break;
                }
            }
        });
    }

    let navigate = use_navigate();
    Effect::new(move || {
        if done.get() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let orders = LocalResource::new(|| crate::net::api::fetch_orders());

    view! {
        <div class="confirm-order-page">
            <h1>"Order placed!"</h1>
            <Suspense fallback=move || view! { <p>"Loading order..."</p> }>
                {move || {
                    orders
                        .get()
                        .and_then(|list| list.into_iter().next())
                        .map(|order| {
                            view! {
                                <p class="confirm-order-page__summary">
                                    {format!("{} \u{2014} {}", order.service_name, order.status)}
                                </p>
                            }
                        })
                }}
            </Suspense>
            <p class="confirm-order-page__redirect">
                "Redirecting to your dashboard in "
                <span class="confirm-order-page__secs">
                    {move || countdown.get().remaining()}
                </span> " seconds..."
            </p>
        </div>
    }
}
