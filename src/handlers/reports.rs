// Summary and insights generation. Both overwrite the stored text wholesale
// and fail with 400 when the date has no entries.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /api/summary/:date
pub async fn generate_summary(
    State(state): State<AppState>,
    Path(date): Path<String>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let summary = state.store.generate_summary(&user.username, &date)?;

    Ok(Json(json!({
        "success": true,
        "summary": summary,
    })))
}

/// POST /api/insights/:date
pub async fn generate_insights(
    State(state): State<AppState>,
    Path(date): Path<String>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let insights = state.store.generate_insights(&user.username, &date)?;

    Ok(Json(json!({
        "success": true,
        "insights": insights,
    })))
}
