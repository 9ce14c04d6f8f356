//! Auth routes: register, login, logout over a signed cookie session.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponseParts, Json, ResponseParts};
use axum_extra::extract::cookie::SignedCookieJar;
use wire::{AuthenticatedUser, PotentialUser};

use crate::config::CookieSettings;
use crate::error::ApiError;
use crate::services::session::{self, Session, SessionUser};
use crate::state::AppState;

// =============================================================================
// SESSION CONTAINER
// =============================================================================

/// Request-scoped session container.
///
/// Extracted from the signed `session` cookie and handed back in the response
/// tuple; a changed session is written as `Set-Cookie`, an untouched one
/// emits nothing. Holds no session when `AppState` has no signing key.
pub struct SessionContainer {
    slot: Option<(SignedCookieJar, Session)>,
    cookie: CookieSettings,
}

impl SessionContainer {
    fn from_headers(headers: &HeaderMap, state: &AppState) -> Self {
        let slot = state.session_key.clone().map(|key| {
            let jar = SignedCookieJar::from_headers(headers, key);
            let session = Session::from_jar(&jar);
            (jar, session)
        });
        Self { slot, cookie: state.cookie }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.slot.as_ref().map(|(_, session)| session)
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.slot.as_mut().map(|(_, session)| session)
    }
}

impl<S> FromRequestParts<S> for SessionContainer
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers, &AppState::from_ref(state)))
    }
}

impl IntoResponseParts for SessionContainer {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        match self.slot {
            Some((jar, session)) if session.is_dirty() => session.write_to(jar, &self.cookie).into_response_parts(res),
            _ => Ok(res),
        }
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user read from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let container = SessionContainer::from_headers(&parts.headers, &AppState::from_ref(state));
        container
            .session()
            .and_then(Session::user)
            .cloned()
            .map(|user| Self { user })
            .ok_or(ApiError::Unauthorized)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn read_candidate(body: Result<Json<PotentialUser>, JsonRejection>) -> Result<PotentialUser, ApiError> {
    let Json(candidate) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    candidate.validate()?;
    Ok(candidate)
}

/// `POST /api/auths/register`: create a user and start a session.
pub async fn register(
    State(state): State<AppState>,
    mut container: SessionContainer,
    body: Result<Json<PotentialUser>, JsonRejection>,
) -> Result<(SessionContainer, Json<AuthenticatedUser>), ApiError> {
    let candidate = read_candidate(body)?;

    let Some(user) = state
        .credentials
        .register(&candidate.username, &candidate.password)
        .await?
    else {
        tracing::info!(username = %candidate.username, "registration rejected: username taken");
        return Err(ApiError::Conflict);
    };

    session::write_session(container.session_mut(), &user);
    Ok((container, Json(AuthenticatedUser::public(user.username))))
}

/// `POST /api/auths/login`: check credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    mut container: SessionContainer,
    body: Result<Json<PotentialUser>, JsonRejection>,
) -> Result<(SessionContainer, Json<AuthenticatedUser>), ApiError> {
    let candidate = read_candidate(body)?;

    let Some(user) = state
        .credentials
        .login(&candidate.username, &candidate.password)
        .await?
    else {
        tracing::warn!(username = %candidate.username, "login rejected");
        return Err(ApiError::Unauthorized);
    };

    tracing::info!(username = %user.username, "user logged in");
    session::write_session(container.session_mut(), &user);
    Ok((container, Json(AuthenticatedUser::public(user.username))))
}

/// `GET /api/auths/logout`: clear the session. Always 200.
pub async fn logout(mut container: SessionContainer) -> (SessionContainer, StatusCode) {
    if let Some(session) = container.session_mut() {
        session.clear();
    }
    (container, StatusCode::OK)
}

#[cfg(test)]
#[path = "auths_test.rs"]
mod tests;
