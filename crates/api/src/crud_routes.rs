//! Generic REST handlers over the CRUD engine.
//!
//! [`resource_router`] turns any [`Entity`] into the standard collection +
//! item route pair, so a resource whose behavior the engine fully covers
//! mounts with one line. Resources with extra operations (locations,
//! equipment) assemble their routers by hand from the same handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use mainteq_core::error::CoreError;
use mainteq_db::crud::Crud;
use mainteq_db::entity::{Entity, KeyBind};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the collection + item routes for an entity.
///
/// `key_path` is the item route template and must carry one `{segment}`
/// per key column, in declaration order: `/{uuid}` for a simple key,
/// `/{equipment_uuid}/{location_technical_code}` for a composite one.
pub fn resource_router<E>(key_path: &str) -> Router<AppState>
where
    E: Entity + Serialize,
    E::Key: DeserializeOwned,
{
    Router::new()
        .route("/", get(list::<E>).post(insert::<E>))
        .route(
            key_path,
            get(get_by_key::<E>).put(update::<E>).delete(delete::<E>),
        )
}

/// POST /
pub async fn insert<E>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<E>)>
where
    E: Entity + Serialize,
{
    let row = Crud::<E>::insert(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /
pub async fn list<E>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>>
where
    E: Entity + Serialize,
{
    let rows = Crud::<E>::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /{key...}
pub async fn get_by_key<E>(
    State(state): State<AppState>,
    Path(key): Path<E::Key>,
) -> AppResult<Json<E>>
where
    E: Entity + Serialize,
    E::Key: DeserializeOwned,
{
    let row = Crud::<E>::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| not_found::<E>(&key))?;
    Ok(Json(row))
}

/// PUT /{key...}
pub async fn update<E>(
    State(state): State<AppState>,
    Path(key): Path<E::Key>,
    Json(body): Json<Value>,
) -> AppResult<Json<E>>
where
    E: Entity + Serialize,
    E::Key: DeserializeOwned,
{
    let row = Crud::<E>::update(&state.pool, &key, &body)
        .await?
        .ok_or_else(|| not_found::<E>(&key))?;
    Ok(Json(row))
}

/// DELETE /{key...} -- responds with the removed row's prior state.
pub async fn delete<E>(
    State(state): State<AppState>,
    Path(key): Path<E::Key>,
) -> AppResult<Json<E>>
where
    E: Entity + Serialize,
    E::Key: DeserializeOwned,
{
    let row = Crud::<E>::delete(&state.pool, &key)
        .await?
        .ok_or_else(|| not_found::<E>(&key))?;
    Ok(Json(row))
}

fn not_found<E: Entity>(key: &E::Key) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::DISPLAY_NAME,
        key: key.display(),
    })
}
