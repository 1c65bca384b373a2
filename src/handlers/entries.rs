// Journal entry handlers. The date path segment is an opaque YYYY-MM-DD key;
// the legacy API never validated it against a calendar, and neither do we.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::store::DayRecord;

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub reflection: String,
}

/// GET /api/entries/:date - the day record, or an empty default. Reads never
/// create state.
pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    user: AuthUser,
) -> Json<DayRecord> {
    Json(state.store.get_day(&user.username, &date))
}

/// POST /api/entries/:date - append a reflection and return the full updated
/// entry list for that date.
pub async fn add_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
    user: AuthUser,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let entries = state
        .store
        .add_entry(&user.username, &date, &payload.reflection)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Entry saved",
            "entries": entries,
        })),
    ))
}
