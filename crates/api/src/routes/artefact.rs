//! Route definitions for the `/artefacts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artefact;
use crate::state::AppState;

/// Routes mounted at `/artefacts`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artefact::list).post(artefact::create))
        .route(
            "/{id}",
            get(artefact::get_by_id).put(artefact::update).delete(artefact::delete),
        )
}
