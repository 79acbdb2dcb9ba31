use std::sync::Arc;
use std::time::Duration;

use crate::cache::ArtefactCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool and everything else sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: curator_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-through cache for artefact listings.
    pub artefact_cache: Arc<ArtefactCache>,
}

impl AppState {
    /// Wire the pool and configuration together, sizing the artefact cache
    /// from `artefact_cache_ttl_secs`.
    pub fn new(pool: curator_db::DbPool, config: ServerConfig) -> Self {
        let ttl = Duration::from_secs(config.artefact_cache_ttl_secs);
        Self {
            pool,
            config: Arc::new(config),
            artefact_cache: Arc::new(ArtefactCache::new(ttl)),
        }
    }
}
