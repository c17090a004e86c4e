use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through axum's `State` extractor.
///
/// Cloned per request; the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: mainteq_db::DbPool,
    pub config: Arc<ServerConfig>,
}
