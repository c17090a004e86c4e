//! Environment-driven server configuration.

use std::str::FromStr;

/// Runtime settings for the HTTP server, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address. `HOST`, default `0.0.0.0`.
    pub host: String,
    /// Bind port. `PORT`, default `3000`.
    pub port: u16,
    /// Allowed CORS origins. `CORS_ORIGINS`, comma-separated, default
    /// `http://localhost:5173`.
    pub cors_origins: Vec<String>,
    /// Per-request timeout. `REQUEST_TIMEOUT_SECS`, default `30`.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Read the configuration from the environment.
    ///
    /// A missing variable falls back to its development default; a
    /// variable that is present but unparseable aborts startup.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parsed_env("PORT", 3000),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            request_timeout_secs: parsed_env("REQUEST_TIMEOUT_SECS", 30),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_env<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{key} has an invalid value: {raw}")),
        Err(_) => default,
    }
}
