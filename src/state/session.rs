//! The session: one token, one user snapshot, passed around explicitly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one session exists per process. It is created on login or by
//! validating a persisted token at startup, and destroyed on logout or by
//! the wrapper's 401 policy. The token is the only durable client-side
//! value; it lives under one storage key and survives restarts.
//!
//! DESIGN
//! ======
//! `Session` is a handle: a signal-wrapped [`SessionState`], a pluggable
//! [`TokenStore`], and an injected redirect. All transitions are pure
//! reducers over the plain state plus the store, so every lifecycle rule
//! is testable against [`MemoryTokenStore`] with no browser and no signal
//! assertions. The handle implements [`SessionHook`], which is all the
//! API wrapper ever sees of it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::forms::profile::ProfilePayload;
use crate::forms::register::RegisterPayload;
use crate::net::api::{Api, SessionHook, UploadFile};
use crate::net::api_auth::Credentials;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::abort::FetchAbort;

/// Storage key holding the persisted session token.
pub const TOKEN_KEY: &str = "token";

/// Plain session snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True while a stored token is being validated at startup.
    pub validating: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Durable home for the persisted token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store for native builds and tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Browser store: `localStorage` under [`TOKEN_KEY`].
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        crate::util::storage::load_string(TOKEN_KEY)
    }

    fn save(&self, token: &str) {
        crate::util::storage::save_string(TOKEN_KEY, token);
    }

    fn clear(&self) {
        crate::util::storage::remove(TOKEN_KEY);
    }
}

// =============================================================
// Reducers
// =============================================================

/// Store a fresh token and user after login or registration.
pub fn apply_login(state: &mut SessionState, token: String, user: User, store: &dyn TokenStore) {
    store.save(&token);
    state.token = Some(token);
    state.user = Some(user);
    state.validating = false;
}

/// Drop token and user, in memory and in the store.
pub fn apply_logout(state: &mut SessionState, store: &dyn TokenStore) {
    store.clear();
    *state = SessionState::default();
}

/// A stored token exists and its validation probe is in flight.
pub fn apply_bootstrap_started(state: &mut SessionState, token: String) {
    state.token = Some(token);
    state.user = None;
    state.validating = true;
}

/// The stored token checked out.
pub fn apply_bootstrap_success(state: &mut SessionState, user: User) {
    state.user = Some(user);
    state.validating = false;
}

/// Fail closed: any validation failure clears the stored token.
pub fn apply_bootstrap_failure(state: &mut SessionState, store: &dyn TokenStore) {
    apply_logout(state, store);
}

/// Refresh the cached user snapshot.
pub fn apply_profile(state: &mut SessionState, user: User) {
    state.user = Some(user);
}

// =============================================================
// Handle
// =============================================================

/// The process-wide session handle. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<SessionState>,
    store: Rc<dyn TokenStore>,
    redirect: Rc<dyn Fn()>,
}

impl Session {
    /// Assemble a session from its parts. Tests pass a
    /// [`MemoryTokenStore`] and a recording closure.
    pub fn new(store: Rc<dyn TokenStore>, redirect: Rc<dyn Fn()>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store,
            redirect,
        }
    }

    /// Browser wiring: `localStorage` persistence and a hard redirect to
    /// the login page when the token is rejected.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        Self::new(
            Rc::new(LocalStorageTokenStore),
            Rc::new(|| crate::util::nav::redirect_to(crate::util::nav::LOGIN_PATH)),
        )
    }

    /// The reactive state for views to subscribe to.
    #[must_use]
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.with_untracked(|state| state.user.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(SessionState::is_authenticated)
    }

    /// Exchange credentials for a session. On success the token is
    /// persisted and the snapshot updated; a failed login leaves any
    /// prior session untouched.
    ///
    /// # Errors
    /// The server's rejection, typically [`ApiError::Message`] with its
    /// banner text.
    pub async fn login(
        &self,
        api: &Api,
        credentials: &Credentials,
        abort: &FetchAbort,
    ) -> Result<(), ApiError> {
        let response = api.login(credentials, abort).await?;
        self.state.update(|state| {
            apply_login(state, response.token, response.user, self.store.as_ref());
        });
        log::info!("session: signed in");
        Ok(())
    }

    /// Create an account and sign in with the returned session.
    ///
    /// # Errors
    /// [`ApiError::Validation`] carrying the server's per-field messages.
    pub async fn register(
        &self,
        api: &Api,
        payload: &RegisterPayload,
        abort: &FetchAbort,
    ) -> Result<(), ApiError> {
        let response = api.register(payload, abort).await?;
        self.state.update(|state| {
            apply_login(state, response.token, response.user, self.store.as_ref());
        });
        log::info!("session: account created");
        Ok(())
    }

    /// Validate any persisted token at startup. Fail-closed: every probe
    /// failure clears the token, except an abort, which leaves the next
    /// startup to try again.
    pub async fn bootstrap(&self, api: &Api, abort: &FetchAbort) {
        let Some(token) = self.store.load() else {
            return;
        };
        self.state
            .update(|state| apply_bootstrap_started(state, token));
        match api.current_user(abort).await {
            Ok(user) => self.state.update(|state| apply_bootstrap_success(state, user)),
            Err(err) if err.is_abort() => {}
            Err(_) => {
                log::warn!("session: stored token rejected, clearing");
                self.state
                    .update(|state| apply_bootstrap_failure(state, self.store.as_ref()));
            }
        }
    }

    /// Drop the session locally. No server round-trip.
    pub fn logout(&self) {
        self.state
            .update(|state| apply_logout(state, self.store.as_ref()));
        log::info!("session: signed out");
    }

    /// Push profile edits and keep the cached snapshot current.
    ///
    /// # Errors
    /// [`ApiError::Validation`] carrying the server's per-field messages.
    pub async fn update_profile(
        &self,
        api: &Api,
        payload: &ProfilePayload,
        picture: Option<UploadFile>,
        abort: &FetchAbort,
    ) -> Result<(), ApiError> {
        let user = api.update_profile(payload, picture, abort).await?;
        self.state.update(|state| apply_profile(state, user));
        Ok(())
    }

    /// Re-fetch the profile, e.g. after a donation changes its counts.
    ///
    /// # Errors
    /// Standard request failures; see [`ApiError`].
    pub async fn refresh_profile(&self, api: &Api, abort: &FetchAbort) -> Result<(), ApiError> {
        let user = api.current_user(abort).await?;
        self.state.update(|state| apply_profile(state, user));
        Ok(())
    }
}

impl SessionHook for Session {
    fn token(&self) -> Option<String> {
        self.state.with_untracked(|state| state.token.clone())
    }

    fn on_unauthorized(&self) {
        self.state
            .update(|state| apply_logout(state, self.store.as_ref()));
        (self.redirect)();
    }
}
