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
    /// How long in-flight requests may keep running after a shutdown
    /// signal, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Lifetime of a cached artefact listing in seconds (default: `30`).
    /// `0` disables the cache.
    pub artefact_cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    /// | `ARTEFACT_CACHE_TTL_SECS`| `30`                       |
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

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: secs_from_env("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: secs_from_env("SHUTDOWN_TIMEOUT_SECS", 30),
            artefact_cache_ttl_secs: secs_from_env("ARTEFACT_CACHE_TTL_SECS", 30),
        }
    }
}

fn secs_from_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .map(|v| {
            v.parse()
                .unwrap_or_else(|_| panic!("{key} must be a valid u64"))
        })
        .unwrap_or(default)
}
