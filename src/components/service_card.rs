//! Catalog service card.

use leptos::prelude::*;

use crate::net::types::Service;

/// Card showing a service's name, category, duration, and price.
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let duration = service
        .time_required
        .map(|minutes| format!("{minutes} min"));

    view! {
        <div class="service-card">
            <h3 class="service-card__name">{service.name}</h3>
            <p class="service-card__category">{service.category}</p>
            <p class="service-card__description">{service.description}</p>
            <div class="service-card__footer">
                <span class="service-card__price">
                    {format!("\u{20b9}{:.2}", service.base_price)}
                </span>
                {duration.map(|d| view! { <span class="service-card__duration">{d}</span> })}
            </div>
        </div>
    }
}
