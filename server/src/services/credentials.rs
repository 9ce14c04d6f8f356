//! Credential service: user registration and password login.
//!
//! DESIGN
//! ======
//! Routes talk to the user store only through [`CredentialService`]. Both
//! operations answer `Ok(None)` for the expected business failure (username
//! taken, bad credentials) and reserve `Err` for the store itself failing.
//! The shipped [`InMemoryCredentials`] keeps Argon2 PHC strings in a
//! process-local map.

use std::collections::HashMap;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use super::session::{SessionUser, generate_token};

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Create a user. `Ok(None)` when the username already exists.
    async fn register(&self, username: &str, password: &str) -> Result<Option<SessionUser>, CredentialError>;

    /// Check a username/password pair. `Ok(None)` on bad credentials.
    async fn login(&self, username: &str, password: &str) -> Result<Option<SessionUser>, CredentialError>;
}

/// Process-local user store: username -> Argon2 PHC string.
#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    users: RwLock<HashMap<String, String>>,
}

impl InMemoryCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialService for InMemoryCredentials {
    async fn register(&self, username: &str, password: &str) -> Result<Option<SessionUser>, CredentialError> {
        if self.users.read().await.contains_key(username) {
            return Ok(None);
        }
        let digest = hash_password(password)?;

        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Ok(None);
        }
        users.insert(username.to_owned(), digest);
        drop(users);

        tracing::info!(%username, "user registered");
        Ok(Some(issue(username)))
    }

    async fn login(&self, username: &str, password: &str) -> Result<Option<SessionUser>, CredentialError> {
        let stored = self.users.read().await.get(username).cloned();
        let Some(digest) = stored else {
            return Ok(None);
        };
        if !verify_password(&digest, password)? {
            return Ok(None);
        }
        Ok(Some(issue(username)))
    }
}

fn issue(username: &str) -> SessionUser {
    SessionUser { username: username.to_owned(), token: generate_token() }
}

/// Hash `password` into an Argon2id PHC string with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| CredentialError::Hash(e.to_string()))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hash(e.to_string()))
}

/// Check `password` against a stored PHC string.
///
/// `Ok(false)` on mismatch; `Err` only when the stored value is unreadable.
pub(crate) fn verify_password(digest: &str, password: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(digest).map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
