//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest applied migration, so a deploy can confirm the schema it runs on.
    pub schema_version: Option<i64>,
    /// Whether artefact listings are cached (`ARTEFACT_CACHE_TTL_SECS > 0`).
    pub artefact_cache_enabled: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let schema_version = curator_db::schema_version(&state.pool).await;
    if let Err(err) = &schema_version {
        tracing::warn!(error = %err, "Health check: database unreachable");
    }
    let db_healthy = schema_version.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version: schema_version.ok().flatten(),
        artefact_cache_enabled: state.config.artefact_cache_ttl_secs > 0,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
