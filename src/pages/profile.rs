//! Profile page: account card, detail forms, wishlist and order rows.

use leptos::prelude::*;

use crate::components::scroll_row::ScrollRow;
use crate::state::auth::{AuthState, password_meets_policy};
use crate::state::ui::{ProfilePane, UiState};

/// Profile page.
///
/// One pane is visible at a time: the overview (account card plus
/// wishlist/previous-order rows), the edit-details form, or the
/// change-password form.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let pane = move || ui.get().profile_pane;
    let select = move |target: ProfilePane| move |_| ui.update(|u| u.profile_pane = target);

    let avatar = move || {
        auth.get()
            .user
            .map_or_else(|| "/profile_pictures/profile.png".to_owned(), |u| u.image_url())
    };
    let username = move || auth.get().user.map_or_else(String::new, |u| u.username);
    let email = move || auth.get().user.map_or_else(String::new, |u| u.email);

    view! {
        <div class="profile-page">
            <section class="profile-page__card">
                <img class="profile-page__avatar" src=avatar alt="Profile picture"/>
                <h1>{username}</h1>
                <p class="profile-page__email">{email}</p>
            </section>

            <div class="profile-page__tabs">
                <button on:click=select(ProfilePane::Overview)>"Overview"</button>
                <button on:click=select(ProfilePane::EditDetails)>"Edit details"</button>
                <button on:click=select(ProfilePane::ChangePassword)>"Change password"</button>
            </div>

            <Show when=move || pane() == ProfilePane::Overview>
                <ProfileOverview/>
            </Show>
            <Show when=move || pane() == ProfilePane::EditDetails>
                <EditDetailsForm/>
            </Show>
            <Show when=move || pane() == ProfilePane::ChangePassword>
                <ChangePasswordForm/>
            </Show>
        </div>
    }
}

/// Wishlist and previous-order rows shown on the overview pane.
#[component]
fn ProfileOverview() -> impl IntoView {
    let wishlist = LocalResource::new(|| crate::net::api::fetch_wishlist());
    let orders = LocalResource::new(|| crate::net::api::fetch_orders());

    view! {
        <ScrollRow title="Wishlist">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    wishlist
                        .get()
                        .map(|list| {
                            list.into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="profile-page__row-card">
                                            <span>{item.name}</span>
                                            <span>{format!("\u{20b9}{:.2}", item.base_price)}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </Suspense>
        </ScrollRow>
        <ScrollRow title="Previous orders">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            list.into_iter()
                                .map(|order| {
                                    view! {
                                        <div class="profile-page__row-card">
                                            <span>{order.service_name}</span>
                                            <span>{order.status}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </Suspense>
        </ScrollRow>
    }
}

/// Username edit form; a saved change is reflected in the session store.
#[component]
fn EditDetailsForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(
        auth.get_untracked()
            .user
            .map_or_else(String::new, |u| u.username),
    );
    let notice = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let name = username.get().trim().to_owned();
        if name.is_empty() {
            notice.set(Some("Username cannot be empty".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&name).await {
                    Ok(()) => {
                        auth.update(|a| {
                            if let Some(user) = &mut a.user {
                                user.username = name.clone();
                            }
                        });
                        notice.set(Some("Details updated".to_owned()));
                    }
                    Err(message) => notice.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    });

    view! {
        <form
            class="profile-page__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || notice.get().is_some()>
                <p class="profile-page__notice">{move || notice.get()}</p>
            </Show>
            <button type="submit" class="btn btn--primary">
                "Save"
            </button>
        </form>
    }
}

/// Password change form mirroring the backend's length policy.
#[component]
fn ChangePasswordForm() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let notice = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let current_value = current.get();
        let new_value = new.get();
        if !password_meets_policy(&new_value) {
            notice.set(Some("Password must be at least 8 characters long".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&current_value, &new_value).await {
                    Ok(()) => {
                        notice.set(Some("Password changed".to_owned()));
                        current.set(String::new());
                        new.set(String::new());
                    }
                    Err(message) => notice.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current_value, new_value);
        }
    });

    view! {
        <form
            class="profile-page__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <label>
                "Current password"
                <input
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    prop:value=move || new.get()
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || notice.get().is_some()>
                <p class="profile-page__notice">{move || notice.get()}</p>
            </Show>
            <button type="submit" class="btn btn--primary">
                "Change password"
            </button>
        </form>
    }
}
