//! Read-through cache for artefact listings, backed by `moka`.
//!
//! Entries are keyed by the optional shelf filter and expire after a fixed
//! TTL. Writes that can change an artefact row call
//! [`ArtefactCache::invalidate`], which drops every entry and advances an
//! epoch. A listing read under an older epoch is served to its caller but
//! never cached.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use curator_core::types::DbId;
use curator_db::models::artefact::Artefact;
use moka::future::Cache;

/// Upper bound on cached listings (one per shelf filter plus the unfiltered one).
const MAX_LISTINGS: u64 = 1_024;

/// TTL cache of artefact listings, shared through `AppState`.
pub struct ArtefactCache {
    inner: Cache<Option<DbId>, Arc<Vec<Artefact>>>,
    enabled: bool,
    epoch: AtomicU64,
}

impl ArtefactCache {
    /// Create an empty cache. A zero `ttl` disables caching.
    pub fn new(ttl: Duration) -> Self {
        let enabled = !ttl.is_zero();
        let mut builder = Cache::builder().max_capacity(MAX_LISTINGS);
        if enabled {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
            enabled,
            epoch: AtomicU64::new(0),
        }
    }

    /// Return the cached listing for `shelf_id`, if there is a live one.
    pub async fn get(&self, shelf_id: Option<DbId>) -> Option<Arc<Vec<Artefact>>> {
        self.inner.get(&shelf_id).await
    }

    /// Serve `shelf_id` from the cache, or run `load` and cache its result.
    ///
    /// The loaded listing is only kept when no invalidation happened while
    /// `load` was running.
    pub async fn get_or_load<F, Fut, E>(
        &self,
        shelf_id: Option<DbId>,
        load: F,
    ) -> Result<Arc<Vec<Artefact>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Artefact>, E>>,
    {
        if let Some(hit) = self.get(shelf_id).await {
            tracing::debug!(shelf_id = ?shelf_id, "Artefact listing served from cache");
            return Ok(hit);
        }

        let epoch = self.epoch.load(Ordering::Acquire);
        let artefacts = Arc::new(load().await?);
        if !self.enabled || self.epoch.load(Ordering::Acquire) != epoch {
            return Ok(artefacts);
        }

        self.inner.insert(shelf_id, Arc::clone(&artefacts)).await;
        // An invalidation that slipped in between the check and the insert
        // must still win.
        if self.epoch.load(Ordering::Acquire) != epoch {
            self.inner.invalidate(&shelf_id).await;
        }
        Ok(artefacts)
    }

    /// Drop every cached listing and discard loads already in flight.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.inner.invalidate_all();
    }
}
