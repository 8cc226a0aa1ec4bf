//! Navigation guard.
//!
//! Every route view is wrapped in [`Guarded`], which runs the two-phase
//! navigation lifecycle: before the view mounts, make sure the session is
//! loaded and evaluate the destination's access requirement; after an
//! allowed transition, synchronize the document metadata through the
//! presentation sink.
//!
//! The decision itself is a pure function of the destination's requirement
//! and a resolved session snapshot, so every navigation property can be
//! tested without a browser.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::routes::{Access, PROFILE_PATH, ROOT_PATH, RouteMeta, SIGNIN_PATH};
use super::sink::SharedSink;
use crate::state::auth::AuthState;

/// Notice shown when a blocked account is ejected.
pub const BLOCKED_NOTICE: &str =
    "Your account has been blocked. Please contact support for assistance.";

/// Outcome of the pre-transition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Mount the destination view.
    Allow,
    /// Navigate to this path instead.
    Redirect(&'static str),
    /// Blocked account: clear the session, show the notice, go to root.
    Eject,
}

/// Decide a navigation attempt from the destination's access requirement
/// and a resolved session snapshot.
///
/// The blocked check precedes every requirement check; the requirement
/// checks run authenticated, then admin, then guest-only. Routes declare
/// at most one requirement, so the ordering is defensive.
pub fn check(access: Access, session: &AuthState) -> Verdict {
    if session.is_blocked() {
        return Verdict::Eject;
    }
    match access {
        Access::RequiresAuthenticated if !session.is_authenticated() => {
            Verdict::Redirect(SIGNIN_PATH)
        }
        Access::RequiresAdmin if !session.is_admin() => Verdict::Redirect(PROFILE_PATH),
        Access::RequiresGuestOnly if session.is_authenticated() => {
            Verdict::Redirect(PROFILE_PATH)
        }
        _ => Verdict::Allow,
    }
}

/// Populate the session store, fetching at most once per invalidation.
///
/// A transport failure or a `401` resolves to an anonymous session; the
/// navigation then proceeds with the visitor treated as anonymous. The
/// epoch recorded at launch keeps a stale result from clobbering a
/// sign-in or logout that landed while the fetch was in flight.
pub fn ensure_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::SessionPhase;

        if auth.get_untracked().phase != SessionPhase::Unloaded {
            return;
        }
        let mut epoch = 0;
        auth.update(|a| epoch = a.begin_load());
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.finish_load(epoch, user));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

fn notify_blocked() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(BLOCKED_NOTICE);
        }
    }
}

/// Route wrapper implementing the navigation lifecycle.
///
/// The wrapped view mounts only once the session has resolved and the
/// verdict is [`Verdict::Allow`]; otherwise the guard navigates away and
/// this transition is terminal.
#[component]
pub fn Guarded(route: RouteMeta, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sink = expect_context::<SharedSink>();

    ensure_session(auth);

    let verdict = Memo::new(move |_| {
        let session = auth.get();
        session.resolved().then(|| check(route.access, &session))
    });

    let navigate = use_navigate();
    // A redirect ends this transition; later verdict changes (e.g. the
    // session clear that follows an eject) must not fire a second one.
    let redirected = StoredValue::new(false);

    Effect::new(move || {
        let Some(v) = verdict.get() else { return };
        if redirected.get_value() {
            return;
        }
        match v {
            Verdict::Allow => {
                sink.apply(route.display_title(), route.display_description());
            }
            Verdict::Redirect(path) => {
                redirected.set_value(true);
                navigate(path, NavigateOptions::default());
            }
            Verdict::Eject => {
                redirected.set_value(true);
                notify_blocked();
                auth.update(AuthState::clear);
                navigate(ROOT_PATH, NavigateOptions::default());
            }
        }
    });

    view! {
        <Show when=move || verdict.get() == Some(Verdict::Allow)>
            {children()}
        </Show>
    }
}
