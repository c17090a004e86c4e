use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mainteq_api::config::ServerConfig;
use mainteq_api::router::build_app_router;
use mainteq_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = mainteq_db::create_pool(&database_url)
        .await
        .expect("database connection failed");
    mainteq_db::health_check(&pool)
        .await
        .expect("database health check failed");
    mainteq_db::run_migrations(&pool)
        .await
        .expect("migrations failed");
    tracing::info!("database ready");

    let host = config.host.parse().expect("HOST is not an IP address");
    let addr = SocketAddr::new(host, config.port);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|err| panic!("cannot bind {addr}: {err}"));
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("shutdown complete");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mainteq_api=debug,mainteq_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on SIGINT, and on SIGTERM where the platform has it, so both
/// an interactive Ctrl-C and a process manager stop the server cleanly.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::info!("SIGINT received, draining"),
            _ = sigterm.recv() => tracing::info!("SIGTERM received, draining"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("SIGINT handler");
        tracing::info!("SIGINT received, draining");
    }
}
