//! Handlers for the hierarchy endpoints of `/technical-locations`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use mainteq_db::models::technical_location::TechnicalLocation;
use mainteq_db::repositories::TechnicalLocationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/technical-locations
///
/// Creates a location under a parent; the technical code is derived as
/// `{parent_technical_code}-{code}` rather than taken from the caller.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<TechnicalLocation>)> {
    let location = TechnicalLocationRepo::create_derived(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/technical-locations/{technical_code}/children
pub async fn children(
    State(state): State<AppState>,
    Path(technical_code): Path<String>,
) -> AppResult<Json<Vec<TechnicalLocation>>> {
    let children = TechnicalLocationRepo::children(&state.pool, &technical_code).await?;
    Ok(Json(children))
}
