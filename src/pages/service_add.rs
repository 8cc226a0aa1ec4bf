//! Admin page for adding a catalog service.

use leptos::prelude::*;

use crate::net::types::NewService;

/// Add-service form (admin only; the route guard enforces it).
#[component]
pub fn ServiceAddPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let minutes = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let notice = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let Ok(base_price) = price.get().trim().parse::<f64>() else {
            notice.set(Some("Enter a numeric base price".to_owned()));
            return;
        };
        let payload = NewService {
            name: name.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            base_price,
            time_required: minutes.get().trim().parse::<i32>().ok(),
            category: category.get().trim().to_owned(),
        };
        if payload.name.is_empty() {
            notice.set(Some("Enter a service name".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_service(&payload).await {
                    Ok(service) => {
                        notice.set(Some(format!("Added \"{}\"", service.name)));
                        name.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        minutes.set(String::new());
                        category.set(String::new());
                    }
                    Err(message) => notice.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="service-add-page">
            <h1>"Add a new service"</h1>
            <form
                class="service-add-page__form"
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
                <label>
                    "Duration (minutes)"
                    <input
                        type="number"
                        prop:value=move || minutes.get()
                        on:input=move |ev| minutes.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category"
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || notice.get().is_some()>
                    <p class="service-add-page__notice">{move || notice.get()}</p>
                </Show>
                <button type="submit" class="btn btn--primary">
                    "Add service"
                </button>
            </form>
        </div>
    }
}
