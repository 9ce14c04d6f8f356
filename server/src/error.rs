//! HTTP error taxonomy for the REST handlers.
//!
//! Every variant is terminal for the request. Responses carry the status code
//! only; clients infer the failure from the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::credentials::CredentialError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body or blank required field.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Registration for a username that already exists.
    #[error("username already taken")]
    Conflict,
    /// Bad credentials or no session where one is required.
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<wire::ValidationError> for ApiError {
    fn from(err: wire::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        tracing::error!(error = %err, "credential service failed");
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
