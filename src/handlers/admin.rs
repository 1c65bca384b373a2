// Admin panel handlers. The `AdminUser` extractor enforces the guard: any
// request without a valid admin session gets 403 before these run.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AdminUser;
use crate::state::AppState;

/// GET /api/admin/users - all accounts with their total entry counts.
pub async fn list_users(State(state): State<AppState>, _admin: AdminUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "users": state.store.list_users(),
    }))
}

/// POST /api/admin/users/:username/make-admin
pub async fn make_admin(
    State(state): State<AppState>,
    Path(username): Path<String>,
    admin: AdminUser,
) -> Result<Json<Value>, ApiError> {
    state.store.set_admin(&admin.username, &username, true)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("{} is now an admin", username),
    })))
}

/// POST /api/admin/users/:username/remove-admin
pub async fn remove_admin(
    State(state): State<AppState>,
    Path(username): Path<String>,
    admin: AdminUser,
) -> Result<Json<Value>, ApiError> {
    state.store.set_admin(&admin.username, &username, false)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("{} admin status removed", username),
    })))
}

/// DELETE /api/admin/users/:username - remove the account and its journal.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    admin: AdminUser,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_user(&admin.username, &username)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("User {} deleted", username),
    })))
}

/// GET /api/admin/stats
pub async fn stats(State(state): State<AppState>, _admin: AdminUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "stats": state.store.stats(),
    }))
}
