//! Persistence for the signed-in user across page reloads.
//!
//! DESIGN
//! ======
//! The browser build keeps one JSON entry in `localStorage`. SSR and tests use
//! an in-memory slot with the same encoding so both behave identically.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex};

use crate::net::types::AuthenticatedUser;
use crate::util::storage;

/// Storage key for the serialized [`AuthenticatedUser`].
pub const AUTHENTICATED_USER_KEY: &str = "pizzeria.authenticatedUser";

pub trait SessionStore: Send + Sync {
    /// Stored user, or `None` when absent or undecodable.
    fn load(&self) -> Option<AuthenticatedUser>;
    fn store(&self, user: &AuthenticatedUser);
    fn clear(&self);
}

/// `localStorage`-backed store. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<AuthenticatedUser> {
        storage::load_json(AUTHENTICATED_USER_KEY)
    }

    fn store(&self, user: &AuthenticatedUser) {
        storage::save_json(AUTHENTICATED_USER_KEY, user);
    }

    fn clear(&self) {
        storage::remove(AUTHENTICATED_USER_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Store pre-seeded with a raw stored value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthenticatedUser> {
        let raw = self.raw.lock().ok()?;
        storage::decode(raw.as_deref()?)
    }

    fn store(&self, user: &AuthenticatedUser) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = storage::encode(user);
        }
    }

    fn clear(&self) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = None;
        }
    }
}

/// Store for the current build target.
pub fn default_store() -> Arc<dyn SessionStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserSessionStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemorySessionStore::default())
    }
}
