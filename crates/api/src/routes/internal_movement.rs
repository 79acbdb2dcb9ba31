//! Route definitions for the `/internal-movements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::internal_movement;
use crate::state::AppState;

/// Routes mounted at `/internal-movements`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{id}                           -> get_by_id
/// PUT    /{id}                           -> update
/// DELETE /{id}                           -> delete
/// GET    /artefact/{artefact_id}         -> list_by_artefact
/// GET    /artefact/{artefact_id}/active  -> get_active_by_artefact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(internal_movement::list).post(internal_movement::create),
        )
        .route(
            "/{id}",
            get(internal_movement::get_by_id)
                .put(internal_movement::update)
                .delete(internal_movement::delete),
        )
        .route(
            "/artefact/{artefact_id}",
            get(internal_movement::list_by_artefact),
        )
        .route(
            "/artefact/{artefact_id}/active",
            get(internal_movement::get_active_by_artefact),
        )
}
