//! Shared response envelope types for API handlers.
//!
//! Use [`MessageResponse`] instead of ad-hoc `serde_json::json!` bodies on
//! the endpoints that confirm an action without returning a row, to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
