use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the JSON course catalog fixture.
    pub catalog_path: PathBuf,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `3000`                             |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                               |
    /// | `CATALOG_PATH`         | `crates/api/fixtures/catalog.json` |
    /// | `LOG_FORMAT`           | `text` (`json` for JSON lines)     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "crates/api/fixtures/catalog.json".into())
            .into();

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog_path,
            json_logs,
        }
    }
}
