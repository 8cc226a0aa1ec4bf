//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Frenzy"</h1>
            <p>
                "Frenzy connects households with verified service professionals "
                "for cleaning, plumbing, electrical work and more. Pick a service, "
                "choose a slot, and a professional is at your door."
            </p>
            <p>
                "Every professional on the platform is verified before their first "
                "booking, and every completed order can be reviewed by the customer."
            </p>
        </div>
    }
}
