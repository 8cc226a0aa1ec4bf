//! Sign-in page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Email/password sign-in form.
///
/// On success the account lands in the session store; the guest-only
/// guard on this route then forwards to the profile page.
#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Enter your email and password".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(user) => auth.update(|a| a.set_user(user)),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value);
        }
    });

    view! {
        <div class="signin-page">
            <h1>"Sign in"</h1>
            <form
                class="signin-page__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="signin-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="signin-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="signin-page__error">{move || error.get()}</p>
                </Show>
                <button type="submit" class="btn btn--primary">
                    "Sign in"
                </button>
            </form>
            <p class="signin-page__alt">
                "New to Frenzy? " <a href="/signup">"Create an account"</a>
            </p>
        </div>
    }
}
