//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the navbar and the API client to coordinate login
//! redirects and identity-dependent rendering. The persisted copy lives behind
//! a [`SessionStore`]; this module mirrors it into a reactive signal so views
//! re-render when the user signs in or out.
//!
//! LIFECYCLE
//! =========
//! `AuthState` starts in `loading` until the hydrated client reads the store
//! once after mount. Server rendering never reads browser storage, so guarded
//! routes render a placeholder there instead of redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Subject;
use crate::util::auth::AppRoute;
use crate::util::session_store::SessionStore;

/// The signed-in user: bearer credential plus user descriptor.
///
/// Both halves are always present together; storage holding only one of them
/// never produces a `Session`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub credential: String,
    pub subject: Subject,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// State after the store has been read.
    #[must_use]
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.subject.role == crate::net::types::Role::Admin)
    }
}

/// Injected session capability shared through Leptos context.
///
/// Holds the persistent store and the reactive mirror of what it contains.
/// All writes go through the store first and the signal is refreshed from a
/// read-back, so the UI never shows a session the store does not hold.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    state: RwSignal<AuthState>,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store, state: RwSignal::new(AuthState::default()) }
    }

    /// Reactive session state.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// The underlying persistent store.
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    /// Read the persisted session into the reactive state.
    pub fn load(&self) {
        self.state.set(AuthState::loaded(self.store.read()));
    }

    /// Persist a freshly issued session.
    pub fn sign_in(&self, credential: &str, subject: &Subject) {
        self.store.save(credential, subject);
        let session = self.store.read();
        if session.is_some() {
            log::info!("signed in as {} ({})", subject.name, subject.role.label());
        }
        self.state.set(AuthState::loaded(session));
    }

    /// Drop the current session, returning where the user should be sent.
    ///
    /// Safe to call with no active session.
    pub fn sign_out(&self) -> AppRoute {
        self.store.clear();
        self.state.set(AuthState::loaded(None));
        log::info!("signed out");
        AppRoute::Login
    }
}
