#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Lifecycle of the cached session fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No fetch attempted yet.
    #[default]
    Unloaded,
    /// A fetch is in flight.
    Loading,
    /// The fetch resolved (possibly to an anonymous session).
    Loaded,
}

/// Session store: the current account record, the fetch phase, and a
/// generation token for discarding stale fetch results.
///
/// The store is owned by the root component as a signal and handed to the
/// navigation guard explicitly; nothing reads it through a global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: SessionPhase,
    /// Bumped on every explicit mutation. An in-flight fetch that started
    /// under an older epoch must not apply its result.
    pub epoch: u64,
}

impl AuthState {
    /// Whether the session fetch has resolved.
    pub fn resolved(&self) -> bool {
        self.phase == SessionPhase::Loaded
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn is_blocked(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_blocked)
    }

    /// Mark the session fetch as in flight and return the epoch the caller
    /// must present back to [`AuthState::finish_load`].
    pub fn begin_load(&mut self) -> u64 {
        self.phase = SessionPhase::Loading;
        self.epoch
    }

    /// Apply a fetch result, unless the store was mutated since `epoch`
    /// was handed out — a stale result is dropped on the floor.
    pub fn finish_load(&mut self, epoch: u64, user: Option<User>) {
        if self.epoch != epoch || self.phase != SessionPhase::Loading {
            return;
        }
        self.user = user;
        self.phase = SessionPhase::Loaded;
    }

    /// Install an account record directly (successful sign-in).
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.phase = SessionPhase::Loaded;
        self.epoch += 1;
    }

    /// Synchronously reset to an anonymous, resolved session. Always
    /// succeeds; the next navigation does not re-fetch.
    pub fn clear(&mut self) {
        self.user = None;
        self.phase = SessionPhase::Loaded;
        self.epoch += 1;
    }

    /// Drop the cached session so the next navigation re-fetches.
    pub fn invalidate(&mut self) {
        self.user = None;
        self.phase = SessionPhase::Unloaded;
        self.epoch += 1;
    }
}

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Client-side mirror of the backend's password policy.
pub fn password_meets_policy(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}
