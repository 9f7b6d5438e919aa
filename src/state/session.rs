//! Session store: the signed-in user, its persistence, and login/logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of the `token` / `user` storage keys and
//! the only owner of `SessionState`. The Leptos layer (`util::auth`) keeps one
//! store in an `RwSignal` per app instance; tests build their own with a
//! `MemoryStore` and a mock `AuthApi`.
//!
//! DESIGN
//! ======
//! Phases: `Restoring -> Authenticated | Unauthenticated`, then
//! `Unauthenticated <-> Authenticated` through login and logout.
//!
//! Login is split into `begin_login` / `finish_login` so the network call can
//! run outside a signal borrow; `SessionContext::login` drives the pair. Each
//! login gets a ticket; a newer login or a logout invalidates older tickets,
//! and a stale ticket never writes storage.
//!
//! The access token is an opaque string. Nothing here decodes or checks it;
//! the backend verifies it on every API call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginResponse, User};
use crate::routes::{self, LOGIN_PATH, Redirect};
use crate::util::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Current user and loading status for this tab.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// `true` until the one-time restore from storage has finished.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Restoring,
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.loading, &self.user) {
            (true, _) => SessionPhase::Restoring,
            (false, None) => SessionPhase::Unauthenticated,
            (false, Some(_)) => SessionPhase::Authenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Guard rule: once restored, a signed-out visitor on a non-public path
    /// is sent to `/login`, replacing the denied entry in history.
    #[must_use]
    pub fn redirect_for(&self, path: &str) -> Option<Redirect> {
        if self.loading || self.user.is_some() || routes::is_public_path(path) {
            None
        } else {
            Some(Redirect::replace(LOGIN_PATH))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
    #[error("could not encode user record: {0}")]
    Encode(String),
    #[error("login superseded by a newer login or logout")]
    Superseded,
    #[error("session context was disposed")]
    Disposed,
}

/// What `restore` found in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Token and user record were present and valid.
    Restored,
    /// No token stored.
    Empty,
    /// Token without a usable user record; both keys were cleared.
    Corrupted,
    /// Storage could not be read.
    Unavailable,
    /// Restore had already completed; nothing was read.
    AlreadyRestored,
}

/// Handle for one in-flight login. Only the most recent ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct LoginTicket(u64);

pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    api: Arc<dyn AuthApi>,
    state: SessionState,
    login_seq: u64,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("login_seq", &self.login_seq)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// New store in the `Restoring` phase. Storage is not read until `restore`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, api: Arc<dyn AuthApi>) -> Self {
        Self { storage, api, state: SessionState::default(), login_seq: 0 }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// Shared handle to the login collaborator, for awaiting outside a borrow.
    #[must_use]
    pub fn api(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.api)
    }

    /// Persisted access token, for attaching to downstream API calls.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).ok().flatten()
    }

    /// Rebuild the session from storage. Runs once; later calls are no-ops.
    pub fn restore(&mut self) -> RestoreOutcome {
        if !self.state.loading {
            return RestoreOutcome::AlreadyRestored;
        }
        let outcome = self.read_stored_session();
        self.state.loading = false;
        outcome
    }

    fn read_stored_session(&mut self) -> RestoreOutcome {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                leptos::logging::warn!("session restore: {e}");
                return RestoreOutcome::Unavailable;
            }
        };
        let Some(token) = token else {
            return RestoreOutcome::Empty;
        };

        let raw_user = match self.storage.get(USER_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("session restore: {e}");
                return RestoreOutcome::Unavailable;
            }
        };

        match parse_stored_user(&token, raw_user.as_deref()) {
            Ok(user) => {
                self.state.user = Some(user);
                RestoreOutcome::Restored
            }
            Err(reason) => {
                leptos::logging::warn!("session restore: discarding stored session: {reason}");
                self.clear_storage();
                RestoreOutcome::Corrupted
            }
        }
    }

    /// Start a login, invalidating any login already in flight.
    pub fn begin_login(&mut self) -> LoginTicket {
        self.login_seq += 1;
        LoginTicket(self.login_seq)
    }

    /// Apply the collaborator's answer for `ticket`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Api`] when the collaborator failed; nothing changes.
    /// - [`SessionError::Superseded`] when a newer login or a logout happened
    ///   since `ticket` was issued; nothing changes.
    /// - [`SessionError::Storage`] / [`SessionError::Encode`] when the session
    ///   could not be persisted; storage is left cleared.
    pub fn finish_login(
        &mut self,
        ticket: LoginTicket,
        result: Result<LoginResponse, ApiError>,
    ) -> Result<LoginResponse, SessionError> {
        if ticket.0 != self.login_seq {
            leptos::logging::log!("session: dropping superseded login result");
            return Err(SessionError::Superseded);
        }
        let response = result?;
        self.persist(&response)?;
        self.state.user = Some(response.user.clone());
        self.state.loading = false;
        Ok(response)
    }

    /// Clear storage and the user, and ask for navigation to `/login`.
    /// Also fences off any login still in flight.
    pub fn logout(&mut self) -> Redirect {
        self.login_seq += 1;
        self.clear_storage();
        self.state.user = None;
        self.state.loading = false;
        Redirect::push(LOGIN_PATH)
    }

    fn persist(&self, response: &LoginResponse) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(&response.user).map_err(|e| SessionError::Encode(e.to_string()))?;
        let written = self
            .storage
            .set(TOKEN_KEY, &response.access_token)
            .and_then(|()| self.storage.set(USER_KEY, &user_json));
        if let Err(e) = written {
            self.clear_storage();
            return Err(e.into());
        }
        Ok(())
    }

    fn clear_storage(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                leptos::logging::warn!("session: failed to remove {key}: {e}");
            }
        }
    }
}

/// Validate a stored token + user pair. Returns why the pair is unusable.
fn parse_stored_user(token: &str, raw_user: Option<&str>) -> Result<User, String> {
    if token.trim().is_empty() {
        return Err("stored token is blank".to_owned());
    }
    let raw_user = raw_user.ok_or_else(|| "token present without user record".to_owned())?;
    serde_json::from_str::<Option<User>>(raw_user)
        .map_err(|e| format!("user record unreadable: {e}"))?
        .ok_or_else(|| "user record is null".to_owned())
}
