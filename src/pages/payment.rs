//! Checkout payment page.

use leptos::prelude::*;

/// Payment step — pick a stored payment method and place the order.
/// Payment capture itself happens on the backend; placing the order
/// forwards to the confirmation page.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let methods = LocalResource::new(|| crate::net::api::fetch_payment_methods());
    let selected = RwSignal::new(Option::<i32>::None);

    view! {
        <div class="payment-page">
            <h1>"Payment"</h1>
            <Suspense fallback=move || view! { <p>"Loading payment methods..."</p> }>
                {move || {
                    methods
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="payment-page__empty">
                                        "No stored payment methods. Add one from your profile."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="payment-page__methods">
                                        {list
                                            .into_iter()
                                            .map(|method| {
                                                let id = method.id;
                                                let label = method.label();
                                                let class = move || {
                                                    if selected.get() == Some(id) {
                                                        "payment-page__method payment-page__method--selected"
                                                    } else {
                                                        "payment-page__method"
                                                    }
                                                };
                                                view! {
                                                    <li>
                                                        <button
                                                            class=class
                                                            on:click=move |_| selected.set(Some(id))
                                                        >
                                                            {label}
                                                            {method
                                                                .is_default
                                                                .then(|| {
                                                                    view! {
                                                                        <span class="payment-page__default">
                                                                            "default"
                                                                        </span>
                                                                    }
                                                                })}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Show when=move || selected.get().is_some()>
                <a href="/confirmorder" class="btn btn--primary">
                    "Place order"
                </a>
            </Show>
        </div>
    }
}
