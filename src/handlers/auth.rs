// Authentication handlers: register, login, logout.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::bearer_token;
use crate::state::AppState;

// Missing JSON keys behave like empty strings, matching the legacy API.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/register - create an account. No session is returned; the
/// client logs in separately.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state
        .store
        .register(&payload.username, &payload.password, &payload.email)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Account created successfully",
        })),
    ))
}

/// POST /api/auth/login - verify credentials and mint a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let username = payload.username.trim();
    let password = payload.password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Username and password required"));
    }

    let grant = state.store.login(username, password)?;

    Ok(Json(json!({
        "success": true,
        "token": grant.token,
        "username": grant.username,
        "is_admin": grant.is_admin,
    })))
}

/// POST /api/auth/logout - drop the session if the header carries one.
/// Idempotent: absent or unknown tokens still return success.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = bearer_token(&headers) {
        state.store.logout(&token);
    }

    Json(json!({ "success": true }))
}
