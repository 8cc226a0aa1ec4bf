//! Contact / support page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact us"</h1>
            <p>"Questions about an order or a service? Reach us any time."</p>
            <ul class="contact-page__channels">
                <li>"Email: support@frenzy.example"</li>
                <li>"Phone: 1800-000-111 (9:00-21:00)"</li>
            </ul>
        </div>
    }
}
