pub mod admin;
pub mod auth;
pub mod entries;
pub mod reports;

use axum::response::Json;
use serde_json::{json, Value};

/// GET /api/health - liveness check, no auth, no store access.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Journal backend is running",
    }))
}
