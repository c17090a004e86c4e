//! HTTP error surface.
//!
//! Every failure a handler can produce converts into one JSON envelope,
//! `{ "error", "code" }`, with a `details` array carrying the complete
//! violation list on validation failures. Storage detail stays out of
//! response bodies: it goes to the log and the client sees a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use mainteq_core::error::CoreError;
use mainteq_core::validation::FieldViolation;
use mainteq_db::crud::CrudError;

pub type AppResult<T> = Result<T, AppError>;

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain outcome: absence on a keyed lookup, or an application-level
    /// conflict.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The payload failed its entity's rules.
    #[error("Validation failed for {entity}")]
    Validation {
        entity: &'static str,
        violations: Vec<FieldViolation>,
    },

    /// The storage layer failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<CrudError> for AppError {
    fn from(err: CrudError) -> Self {
        match err {
            CrudError::Validation { entity, violations } => {
                AppError::Validation { entity, violations }
            }
            CrudError::Storage(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { entity, violations } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": format!("Validation failed for {entity}"),
                    "code": "VALIDATION_ERROR",
                    "details": violations,
                }),
            ),
            AppError::Core(CoreError::NotFound { entity, key }) => (
                StatusCode::NOT_FOUND,
                envelope("NOT_FOUND", format!("{entity} with key {key} not found")),
            ),
            AppError::Core(CoreError::Conflict(message)) => {
                (StatusCode::CONFLICT, envelope("CONFLICT", message.clone()))
            }
            AppError::Database(err) => storage_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn envelope(code: &str, message: String) -> Value {
    json!({ "error": message, "code": code })
}

/// Map a sqlx failure onto the response surface.
///
/// Driver-reported absence is a 404. A 23505 on one of the schema's named
/// `uq_*` constraints, or on a primary key, is a 409: those are the
/// uniqueness invariants the caller can act on. Anything else is a 500;
/// the detail is logged and the body stays generic.
fn storage_response(err: &sqlx::Error) -> (StatusCode, Value) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            envelope("NOT_FOUND", "Resource not found".into()),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") || constraint.ends_with("_pkey") {
                return (
                    StatusCode::CONFLICT,
                    envelope(
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    ),
                );
            }
        }
    }

    tracing::error!(error = %err, "storage failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        envelope("INTERNAL_ERROR", "An internal error occurred".into()),
    )
}
