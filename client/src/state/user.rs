//! Signed-in user state and the transitions pages drive.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`UserContext`] is provided once by the app shell. Pages call
//! `register_user`/`login_user`/`clear_user`; the navbar and route guards read
//! `authenticated_user` to decide what to render.
//!
//! Identity lives in two places that are always written together: the
//! reactive [`UserState`] signal and the [`SessionStore`].

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session_store::SessionStore;
use crate::net::api::{self, ApiError};
use crate::net::types::{AuthenticatedUser, PotentialUser};

/// Current identity plus whether the stored session has been consulted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    pub authenticated_user: Option<AuthenticatedUser>,
    pub loading: bool,
}

impl UserState {
    /// State before the session store has been read.
    pub fn pending() -> Self {
        Self { authenticated_user: None, loading: true }
    }

    pub fn sign_in(&mut self, user: AuthenticatedUser) {
        self.authenticated_user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.authenticated_user = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated_user.is_some()
    }
}

/// Console line for a user returned by the auth endpoints.
pub(crate) fn user_log_line(label: &str, user: &AuthenticatedUser) -> String {
    format!("{label}: {}", user.username)
}

#[derive(Clone, Copy)]
pub struct UserContext {
    state: RwSignal<UserState>,
    store: StoredValue<Arc<dyn SessionStore>>,
}

impl UserContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { state: RwSignal::new(UserState::pending()), store: StoredValue::new(store) }
    }

    pub fn state(&self) -> RwSignal<UserState> {
        self.state
    }

    /// Tracked read of the signed-in user.
    pub fn authenticated_user(&self) -> Option<AuthenticatedUser> {
        self.state.with(|s| s.authenticated_user.clone())
    }

    /// Load whatever the session store holds and finish the pending phase.
    pub fn restore(&self) {
        match self.store.with_value(|store| store.load()) {
            Some(user) => self.state.update(|s| s.sign_in(user)),
            None => self.state.update(UserState::sign_out),
        }
    }

    /// Persist `user` and publish it to the UI.
    pub fn apply_authenticated(&self, user: AuthenticatedUser) {
        self.store.with_value(|store| store.store(&user));
        self.state.update(|s| s.sign_in(user));
    }

    /// Register `user` and sign in as the created account.
    ///
    /// # Errors
    ///
    /// Returns the API error after logging it; state is left untouched.
    pub async fn register_user(self, user: PotentialUser) -> Result<(), ApiError> {
        match api::register(&user).await {
            Ok(created) => {
                leptos::logging::log!("{}", user_log_line("createdUser", &created));
                self.apply_authenticated(created);
                Ok(())
            }
            Err(err) => {
                leptos::logging::error!("registerUser::error: {err}");
                Err(err)
            }
        }
    }

    /// Log in as `user`.
    ///
    /// # Errors
    ///
    /// Returns the API error after logging it; state is left untouched.
    pub async fn login_user(self, user: PotentialUser) -> Result<(), ApiError> {
        match api::login(&user).await {
            Ok(authenticated) => {
                leptos::logging::log!("{}", user_log_line("authenticatedUser", &authenticated));
                self.apply_authenticated(authenticated);
                Ok(())
            }
            Err(err) => {
                leptos::logging::error!("loginUser::error: {err}");
                Err(err)
            }
        }
    }

    /// Forget the signed-in user locally. The server session is untouched.
    pub fn clear_user(&self) {
        self.store.with_value(|store| store.clear());
        self.state.update(UserState::sign_out);
    }
}

/// The [`UserContext`] provided by the app shell.
pub fn use_user_context() -> UserContext {
    expect_context::<UserContext>()
}
