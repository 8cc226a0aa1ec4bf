//! Admin page for editing an existing catalog service.

use leptos::prelude::*;

use crate::net::types::{NewService, Service};

/// Edit-service form (admin only; the route guard enforces it).
///
/// Picking a service from the list prefills the form; saving sends the
/// changed fields back.
#[component]
pub fn ServiceEditPage() -> impl IntoView {
    let services = LocalResource::new(|| crate::net::api::fetch_services());
    let selected = RwSignal::new(Option::<i32>::None);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let notice = RwSignal::new(Option::<String>::None);

    let prefill = move |service: &Service| {
        selected.set(Some(service.id));
        name.set(service.name.clone());
        description.set(service.description.clone());
        price.set(format!("{:.2}", service.base_price));
        notice.set(None);
    };

    let submit = Callback::new(move |()| {
        let Some(id) = selected.get() else {
            notice.set(Some("Pick a service to edit".to_owned()));
            return;
        };
        let Ok(base_price) = price.get().trim().parse::<f64>() else {
            notice.set(Some("Enter a numeric base price".to_owned()));
            return;
        };
        let payload = NewService {
            name: name.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            base_price,
            time_required: None,
            category: String::new(),
        };
        if payload.name.is_empty() {
            notice.set(Some("Enter a service name".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_service(id, &payload).await {
                    Ok(()) => notice.set(Some("Service updated".to_owned())),
                    Err(message) => notice.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
        }
    });

    view! {
        <div class="service-edit-page">
            <h1>"Edit a service"</h1>

            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="service-edit-page__list">
                                    {list
                                        .into_iter()
                                        .map(|service| {
                                            let label = service.name.clone();
                                            view! {
                                                <li>
                                                    <button
                                                        class="service-edit-page__pick"
                                                        on:click=move |_| prefill(&service)
                                                    >
                                                        {label}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || selected.get().is_some()>
                <form
                    class="service-edit-page__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Base price"
                        <input
                            type="number"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || notice.get().is_some()>
                        <p class="service-edit-page__notice">{move || notice.get()}</p>
                    </Show>
                    <button type="submit" class="btn btn--primary">
                        "Save changes"
                    </button>
                </form>
            </Show>
        </div>
    }
}
