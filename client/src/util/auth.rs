//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that need a signed-in user apply identical redirect
//! behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::user::{UserContext, UserState};

pub const LOGIN_ROUTE: &str = "/login";

pub fn should_redirect_unauth(state: &UserState) -> bool {
    !state.loading && state.authenticated_user.is_none()
}

/// Redirect to `/login` whenever the stored session has been read and no user
/// is present.
pub fn install_unauth_redirect<F>(user: UserContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = user.state();
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
