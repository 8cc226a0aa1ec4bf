//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::password_meets_policy;

/// New-account form. A successful registration forwards to sign-in.
#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let registered = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        if registered.get() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |()| {
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();
        if username_value.trim().is_empty() || email_value.trim().is_empty() {
            error.set(Some("Enter a username and an email".to_owned()));
            return;
        }
        if !password_meets_policy(&password_value) {
            error.set(Some("Password must be at least 8 characters long".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::register(
                    username_value.trim(),
                    email_value.trim(),
                    &password_value,
                )
                .await
                {
                    Ok(()) => registered.set(true),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    });

    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            <form
                class="signup-page__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="signup-page__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="signup-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="signup-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="signup-page__error">{move || error.get()}</p>
                </Show>
                <button type="submit" class="btn btn--primary">
                    "Sign up"
                </button>
            </form>
            <p class="signup-page__alt">
                "Already registered? " <a href="/signin">"Sign in"</a>
            </p>
        </div>
    }
}
