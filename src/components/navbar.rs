//! Top navigation bar with brand link, search box, and session actions.

use leptos::prelude::*;

use crate::components::search_box::SearchBox;
use crate::state::auth::AuthState;

/// Navigation bar shown on every page.
///
/// Links adapt to the session: anonymous visitors get sign-in/sign-up,
/// signed-in users get their account links, admins additionally get the
/// service management links. Logout ends the server session, clears the
/// local one, and returns to the home page.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = move || auth.get().user.map_or_else(String::new, |u| u.username);
    let authenticated = move || auth.get().is_authenticated();
    let admin = move || auth.get().is_admin();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::clear);
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message("You have been logged out");
                    // Full reload for a clean state.
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Frenzy"</a>
            <SearchBox/>
            <div class="navbar__links">
                <a href="/about">"About"</a>
                <a href="/contactus">"Contact"</a>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a href="/signin">"Sign in"</a>
                            <a href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/cart">"Cart"</a>
                    <a href="/wishlist">"Wishlist"</a>
                    <Show when=admin>
                        <a href="/service">"Add service"</a>
                        <a href="/scruitny">"Edit services"</a>
                    </Show>
                    <a href="/profile" class="navbar__user">{username}</a>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
