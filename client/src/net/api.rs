//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result` so pages can log a failure and keep the
//! current view instead of panicking mid-hydration. A non-success status is
//! reported as `fetch error : {status} : {status_text}`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthenticatedUser, Drink, NewPizza, Pizza, PotentialUser};

pub(crate) const REGISTER_ENDPOINT: &str = "/api/auths/register";
pub(crate) const LOGIN_ENDPOINT: &str = "/api/auths/login";
pub(crate) const LOGOUT_ENDPOINT: &str = "/api/auths/logout";
pub(crate) const PIZZAS_ENDPOINT: &str = "/api/pizzas";
pub(crate) const DRINKS_ENDPOINT: &str = "/api/drinks";

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("fetch error : {status} : {status_text}")]
    Http { status: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error(status: u16, status_text: &str) -> ApiError {
    ApiError::Http { status, status_text: status_text.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Create an account via `POST /api/auths/register`.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for a non-success status (400 blank fields,
/// 409 username taken) and transport/decoding errors otherwise.
pub async fn register(user: &PotentialUser) -> Result<AuthenticatedUser, ApiError> {
    post_json(REGISTER_ENDPOINT, user).await
}

/// Sign in via `POST /api/auths/login`.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for a non-success status (401 bad credentials).
pub async fn login(user: &PotentialUser) -> Result<AuthenticatedUser, ApiError> {
    post_json(LOGIN_ENDPOINT, user).await
}

/// Drop the server-side session via `GET /api/auths/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(http_error(resp.status(), &resp.status_text()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the pizza menu from `GET /api/pizzas`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a pizza list.
pub async fn fetch_pizzas() -> Result<Vec<Pizza>, ApiError> {
    get_json(PIZZAS_ENDPOINT).await
}

/// Fetch the drink menu from `GET /api/drinks`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a drink list.
pub async fn fetch_drinks() -> Result<Vec<Drink>, ApiError> {
    get_json(DRINKS_ENDPOINT).await
}

/// Add a pizza via `POST /api/pizzas`. Requires a session cookie.
///
/// # Errors
///
/// Returns [`ApiError::Http`] with 401 when no session is active.
pub async fn add_pizza(pizza: &NewPizza) -> Result<Pizza, ApiError> {
    post_json(PIZZAS_ENDPOINT, pizza).await
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T>(url: &str) -> Result<T, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError> {
    let _ = (url, body);
    Err(ApiError::Unavailable)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !is_success(resp.status()) {
        return Err(http_error(resp.status(), &resp.status_text()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
