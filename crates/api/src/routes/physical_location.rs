//! Route definitions for the `/physical-locations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::physical_location;
use crate::state::AppState;

/// Routes mounted at `/physical-locations`. Cells are created with their
/// shelf, so this resource is read-only.
///
/// ```text
/// GET /          -> list
/// GET /lookup    -> lookup
/// GET /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(physical_location::list))
        .route("/lookup", get(physical_location::lookup))
        .route("/{id}", get(physical_location::get_by_id))
}
