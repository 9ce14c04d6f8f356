//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the credential service, the menu catalogue and the session
//! signing key. Without a key the server runs with no session container:
//! auth endpoints still answer, but nothing is persisted in a cookie.

use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use tokio::sync::RwLock;

use crate::config::CookieSettings;
use crate::services::credentials::CredentialService;
use crate::services::menu::Menu;

/// Shared application state, injected into Axum handlers via State extractor.
/// Cloned per request; inner fields are `Arc`-wrapped or small values.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialService>,
    pub menu: Arc<RwLock<Menu>>,
    /// Signing key for the session cookie. `None` disables sessions.
    pub session_key: Option<Key>,
    pub cookie: CookieSettings,
}

impl AppState {
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialService>, menu: Menu, session_key: Option<Key>, cookie: CookieSettings) -> Self {
        Self { credentials, menu: Arc::new(RwLock::new(menu)), session_key, cookie }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::credentials::InMemoryCredentials;

    /// State with in-memory credentials, the seeded menu and a random key.
    #[must_use]
    pub fn test_app_state() -> AppState {
        test_app_state_with(Arc::new(InMemoryCredentials::new()))
    }

    /// State using the given credential service.
    #[must_use]
    pub fn test_app_state_with(credentials: Arc<dyn CredentialService>) -> AppState {
        AppState::new(credentials, Menu::seeded(), Some(Key::generate()), CookieSettings::default())
    }

    /// State with sessions disabled.
    #[must_use]
    pub fn test_app_state_without_sessions() -> AppState {
        AppState::new(Arc::new(InMemoryCredentials::new()), Menu::seeded(), None, CookieSettings::default())
    }
}
