//! Reactive session context shared by the router, guard, and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` builds one `SessionContext` per app and provides it
//! through Leptos context. Components read session state through
//! `use_session()`, which panics when called outside the provider since that
//! is a wiring bug, not a runtime condition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{Credentials, LoginResponse, User};
use crate::routes::Redirect;
use crate::state::session::{RestoreOutcome, SessionError, SessionPhase, SessionState, SessionStore};

/// Copyable handle to the app's session store.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore>,
    pending_nav: RwSignal<Option<Redirect>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store: RwSignal::new(store), pending_nav: RwSignal::new(None) }
    }

    /// Snapshot of the current state (tracked).
    pub fn state(&self) -> SessionState {
        self.store.with(|s| s.state().clone())
    }

    pub fn phase(&self) -> SessionPhase {
        self.store.with(SessionStore::phase)
    }

    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    pub fn loading(&self) -> bool {
        self.phase() == SessionPhase::Restoring
    }

    /// Run the one-time restore from storage.
    pub fn restore(&self) -> RestoreOutcome {
        self.store
            .try_update(SessionStore::restore)
            .unwrap_or(RestoreOutcome::AlreadyRestored)
    }

    /// Log in and return the backend payload.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the store; `Disposed` if the app was
    /// torn down while the request was in flight.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, SessionError> {
        let ticket = self
            .store
            .try_update_untracked(SessionStore::begin_login)
            .ok_or(SessionError::Disposed)?;
        let api = self
            .store
            .try_with_untracked(SessionStore::api)
            .ok_or(SessionError::Disposed)?;
        let result = api.login(&credentials).await;
        if let Err(e) = &result {
            leptos::logging::warn!("login failed: {e}");
        }
        self.store
            .try_update(|s| s.finish_login(ticket, result))
            .ok_or(SessionError::Disposed)?
    }

    /// Sign out and queue navigation to `/login`.
    pub fn logout(&self) {
        if let Some(redirect) = self.store.try_update(SessionStore::logout) {
            self.pending_nav.set(Some(redirect));
        }
    }

    /// Where the app should go next while showing `path`, if anywhere.
    ///
    /// A navigation queued by `logout` is taken first and replaces the guard
    /// redirect, so signing out produces a single history entry. Taking it
    /// does not notify subscribers.
    pub fn next_navigation(&self, path: &str) -> Option<Redirect> {
        self.pending_nav.track();
        if let Some(queued) = self.pending_nav.try_update_untracked(Option::take).flatten() {
            return Some(queued);
        }
        self.store.with(|s| s.state().redirect_for(path))
    }
}

/// Create the session context for this app and provide it to descendants.
pub fn provide_session(store: SessionStore) -> SessionContext {
    let session = SessionContext::new(store);
    provide_context(session);
    session
}

/// Read the session context.
///
/// # Panics
///
/// Panics when called outside a `SessionProvider` subtree.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| panic!("use_session must be called inside a <SessionProvider>"))
}

#[must_use]
pub fn navigate_options(redirect: Redirect) -> NavigateOptions {
    NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() }
}

/// Install the guard effect: carry out navigation queued by `logout`, and
/// send signed-out visitors on non-public paths to `/login`.
pub fn install_session_guard<F>(session: SessionContext, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Some(redirect) = session.next_navigation(&path) {
            navigate(redirect.to, navigate_options(redirect));
        }
    });
}
