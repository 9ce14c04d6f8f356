//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) before calling [`ServerConfig::from_env`],
//! so every knob here can come from either the process environment or a
//! dotenv file.

use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_MAX_AGE_HOURS: u32 = 24;
/// Upper bound for `SESSION_MAX_AGE_HOURS` (one year).
pub const MAX_SESSION_MAX_AGE_HOURS: u32 = 24 * 365;

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age: time::Duration,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self { secure: false, max_age: time::Duration::hours(i64::from(DEFAULT_SESSION_MAX_AGE_HOURS)) }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Secret used to sign session cookies. `None` means a random per-process key.
    pub session_secret: Option<String>,
    pub cookie: CookieSettings,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SESSION_SECRET`: signing secret for the session cookie
    /// - `COOKIE_SECURE`: mark the session cookie `Secure` (default false)
    /// - `SESSION_MAX_AGE_HOURS`: cookie lifetime, default 24, at most one year
    #[must_use]
    pub fn from_env() -> Self {
        let session_secret = std::env::var("SESSION_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let cookie = CookieSettings {
            secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            max_age: time::Duration::hours(i64::from(session_max_age_hours(
                std::env::var("SESSION_MAX_AGE_HOURS").ok().as_deref(),
            ))),
        };
        Self { port: env_parse("PORT", DEFAULT_PORT), session_secret, cookie }
    }

    /// Signing key for session cookies.
    ///
    /// Without `SESSION_SECRET` a fresh key is generated, so sessions do not
    /// survive a restart.
    #[must_use]
    pub fn session_key(&self) -> Key {
        match &self.session_secret {
            Some(secret) => key_from_secret(secret),
            None => {
                tracing::warn!("SESSION_SECRET not set, using a random session key");
                Key::generate()
            }
        }
    }
}

/// Derive a 64-byte cookie signing key from an arbitrary-length secret.
#[must_use]
pub fn key_from_secret(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Validate a raw `SESSION_MAX_AGE_HOURS` value.
///
/// Unset means the default. Non-numeric, zero or negative values fall back
/// to the default; values above [`MAX_SESSION_MAX_AGE_HOURS`] are clamped.
pub(crate) fn session_max_age_hours(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_SESSION_MAX_AGE_HOURS;
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            tracing::warn!(value = %raw, default = DEFAULT_SESSION_MAX_AGE_HOURS, "invalid SESSION_MAX_AGE_HOURS, using default");
            DEFAULT_SESSION_MAX_AGE_HOURS
        }
        Ok(hours) if hours > u64::from(MAX_SESSION_MAX_AGE_HOURS) => {
            tracing::warn!(value = hours, max = MAX_SESSION_MAX_AGE_HOURS, "SESSION_MAX_AGE_HOURS too large, clamping");
            MAX_SESSION_MAX_AGE_HOURS
        }
        Ok(hours) => u32::try_from(hours).unwrap_or(MAX_SESSION_MAX_AGE_HOURS),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
