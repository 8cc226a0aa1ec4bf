//! Shopping cart page.

use leptos::prelude::*;

use crate::net::types::CartItem;

fn total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|i| i.base_price * f64::from(i.quantity))
        .sum()
}

/// Cart page — lists the selected services and starts checkout.
#[component]
pub fn CartPage() -> impl IntoView {
    let items = LocalResource::new(|| crate::net::api::fetch_cart());

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Suspense fallback=move || view! { <p>"Loading cart..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="cart-page__empty">
                                        "Your cart is empty. " <a href="/">"Browse services"</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                let sum = total(&list);
                                view! {
                                    <ul class="cart-page__items">
                                        {list
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="cart-page__item">
                                                        <span>{item.name}</span>
                                                        <span>{format!("x{}", item.quantity)}</span>
                                                        <span>
                                                            {format!("\u{20b9}{:.2}", item.base_price)}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <div class="cart-page__footer">
                                        <span class="cart-page__total">
                                            {format!("Total: \u{20b9}{sum:.2}")}
                                        </span>
                                        <a href="/address" class="btn btn--primary">
                                            "Proceed to address"
                                        </a>
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
