// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

use crate::store::StoreError;

/// HTTP-level error with the status code and client-facing message the legacy
/// API contract requires. Every handler failure is converted into the JSON
/// body `{"success": false, "error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.to_string(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            StoreError::UnknownUser => ApiError::NotFound(err.to_string()),
            // The legacy API reports duplicate usernames, empty input, missing
            // entries and self-modification all as 400.
            StoreError::EmptyCredentials
            | StoreError::UsernameTaken
            | StoreError::EmptyReflection
            | StoreError::NoEntries
            | StoreError::SelfDemotion
            | StoreError::SelfDeletion => ApiError::BadRequest(err.to_string()),
        }
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_expected_status_codes() {
        let cases = [
            (StoreError::EmptyCredentials, StatusCode::BAD_REQUEST),
            (StoreError::UsernameTaken, StatusCode::BAD_REQUEST),
            (StoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (StoreError::EmptyReflection, StatusCode::BAD_REQUEST),
            (StoreError::NoEntries, StatusCode::BAD_REQUEST),
            (StoreError::UnknownUser, StatusCode::NOT_FOUND),
            (StoreError::SelfDemotion, StatusCode::BAD_REQUEST),
            (StoreError::SelfDeletion, StatusCode::BAD_REQUEST),
        ];

        for (err, status) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status_code(), status);
        }
    }

    #[test]
    fn error_body_carries_the_exact_message() {
        let api: ApiError = StoreError::UsernameTaken.into();
        let body = api.to_json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Username already exists");
    }
}
