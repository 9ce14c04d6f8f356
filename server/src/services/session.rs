//! Cookie-backed session value and token generation.
//!
//! ARCHITECTURE
//! ============
//! A [`Session`] is loaded from the signed `session` cookie at the start of a
//! request, mutated explicitly by handlers through [`Session::set`] and
//! [`Session::clear`], and written back by the hosting layer only when it
//! changed. The cookie payload is base64url-encoded JSON `{username, token}`;
//! the signature comes from `SignedCookieJar`.

use std::fmt::Write;

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::CookieSettings;

pub const SESSION_COOKIE_NAME: &str = "session";

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Authenticated user carried by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    /// Opaque token issued by the credential service.
    pub token: String,
}

/// Request-scoped session state.
///
/// `user` is either absent or carries both username and token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
    dirty: bool,
}

impl Session {
    /// Load the session from a verified cookie jar.
    ///
    /// Missing, tampered or undecodable cookies yield an empty session.
    #[must_use]
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        let user = jar
            .get(SESSION_COOKIE_NAME)
            .and_then(|cookie| decode_cookie_value(cookie.value()));
        Self { user, dirty: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.dirty = true;
    }

    /// Apply this session to `jar`: a signed cookie when a user is set, an
    /// expired removal cookie otherwise.
    #[must_use]
    pub fn write_to(&self, jar: SignedCookieJar, settings: &CookieSettings) -> SignedCookieJar {
        match &self.user {
            Some(user) => {
                let Some(value) = encode_cookie_value(user) else {
                    return jar;
                };
                jar.add(session_cookie(value, settings, settings.max_age))
            }
            None => jar.add(session_cookie(String::new(), settings, time::Duration::ZERO)),
        }
    }
}

/// Persist `user` into the request's session container.
///
/// Does nothing when the request has no session container (the server was
/// started without a signing key).
pub fn write_session(session: Option<&mut Session>, user: &SessionUser) {
    let Some(session) = session else {
        return;
    };
    session.set(user.clone());
}

fn session_cookie(value: String, settings: &CookieSettings, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .max_age(max_age)
        .build()
}

pub(crate) fn encode_cookie_value(user: &SessionUser) -> Option<String> {
    let json = serde_json::to_vec(user).ok()?;
    Some(URL_SAFE_NO_PAD.encode(json))
}

pub(crate) fn decode_cookie_value(value: &str) -> Option<SessionUser> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
