//! Shared request/response model for the storefront REST API.
//!
//! This crate owns the JSON representation used by both `server` and `client`
//! so the two sides cannot drift on field names or optionality.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Error returned when a request body fails field validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only.
    #[error("field `{0}` must not be blank")]
    Blank(&'static str),
}

/// Credentials submitted to register or log in.
///
/// Missing fields deserialize as empty strings so an incomplete body is
/// rejected by [`PotentialUser::validate`] rather than by the JSON layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl PotentialUser {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Reject blank usernames and passwords.
    ///
    /// Trimming is only used for the emptiness check; the values themselves
    /// are left exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Blank`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)
    }
}

/// A signed-in user as seen by the browser.
///
/// The auth endpoints answer with `{ "username": ... }` only, so `token` is
/// absent on the client unless a caller supplies one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthenticatedUser {
    /// Public view of a user: the username without any token.
    #[must_use]
    pub fn public(username: impl Into<String>) -> Self {
        Self { username: username.into(), token: None }
    }
}

/// A pizza on the menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// Body of `POST /api/pizzas`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPizza {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NewPizza {
    /// # Errors
    ///
    /// Returns [`ValidationError::Blank`] if the title or description is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)
    }
}

/// A drink on the menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u32,
    pub title: String,
    /// Image URL shown on the drink card.
    pub image: String,
    /// Human-readable volume, e.g. `"33 cl"`.
    pub volume: String,
    /// Price in euros.
    pub price: f64,
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}
