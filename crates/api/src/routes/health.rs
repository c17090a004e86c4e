//! Service health endpoint, mounted at the root rather than under
//! `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// Probes the database and reports overall service health. The service
/// stays up (as `degraded`) when the database is unreachable.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let database_ok = mainteq_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if database_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_ok { "up" } else { "down" },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
