use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Resolved account identity for routes that require a valid session.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Resolved account identity for admin routes. Missing token, unknown token
/// and authenticated-but-not-admin all collapse to the same 403 so the
/// response leaks nothing about token validity.
#[derive(Clone, Debug)]
pub struct AdminUser {
    pub username: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let username = bearer_token(&parts.headers)
            .and_then(|token| state.store.resolve_session(&token))
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        Ok(AuthUser { username })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forbidden = || ApiError::forbidden("Admin access required");

        let username = bearer_token(&parts.headers)
            .and_then(|token| state.store.resolve_session(&token))
            .ok_or_else(forbidden)?;

        // A dangling session can name a deleted account; that fails here too.
        let account = state.store.account(&username).ok_or_else(forbidden)?;
        if !account.is_admin {
            return Err(forbidden());
        }

        Ok(AdminUser { username })
    }
}
