//! Checkout address page with saved/new section toggling.

use leptos::prelude::*;

use crate::net::types::SavedAddress;
use crate::state::ui::{AddressPane, UiState};

/// Address step of checkout.
///
/// One section is visible at a time: the overview, the saved address, or
/// the new-address form.
#[component]
pub fn AddressPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let saved = LocalResource::new(|| crate::net::api::fetch_address());

    let pane = move || ui.get().address_pane;
    let select = move |target: AddressPane| move |_| ui.update(|u| u.address_pane = target);

    view! {
        <div class="address-page">
            <h1>"Delivery address"</h1>

            <div class="address-page__tabs">
                <button on:click=select(AddressPane::Overview)>"Overview"</button>
                <button on:click=select(AddressPane::Saved)>"Saved address"</button>
                <button on:click=select(AddressPane::New)>"New address"</button>
            </div>

            <Show when=move || pane() == AddressPane::Overview>
                <p class="address-page__hint">
                    "Use your saved address or enter a new one, then continue to payment."
                </p>
            </Show>

            <Show when=move || pane() == AddressPane::Saved>
                <Suspense fallback=move || view! { <p>"Loading address..."</p> }>
                    {move || {
                        saved
                            .get()
                            .map(|address| match address {
                                Some(a) => {
                                    view! {
                                        <div class="address-page__saved">
                                            <p>{a.address}</p>
                                            <p>{format!("PIN {}", a.pin_code)}</p>
                                            <p>{a.phone_number}</p>
                                            <a href="/payment" class="btn btn--primary">
                                                "Deliver here"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="address-page__empty">"No saved address yet."</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </Show>

            <Show when=move || pane() == AddressPane::New>
                <NewAddressForm/>
            </Show>
        </div>
    }
}

/// New-address form; saving forwards to the payment step.
#[component]
fn NewAddressForm() -> impl IntoView {
    let address = RwSignal::new(String::new());
    let pin_code = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let saved = RwSignal::new(false);

    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        if saved.get() {
            navigate("/payment", leptos_router::NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |()| {
        let payload = SavedAddress {
            address: address.get().trim().to_owned(),
            pin_code: pin_code.get().trim().to_owned(),
            phone_number: phone.get().trim().to_owned(),
        };
        if payload.address.is_empty() || payload.pin_code.is_empty() {
            error.set(Some("Enter an address and a PIN code".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_address(&payload).await {
                    Ok(()) => saved.set(true),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <form
            class="address-page__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label>
                "Address"
                <textarea
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "PIN code"
                <input
                    type="text"
                    prop:value=move || pin_code.get()
                    on:input=move |ev| pin_code.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="address-page__error">{move || error.get()}</p>
            </Show>
            <button type="submit" class="btn btn--primary">
                "Save and continue"
            </button>
        </form>
    }
}
