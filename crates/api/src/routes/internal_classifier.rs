//! Route definitions for the `/internal-classifiers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::internal_classifier;
use crate::state::AppState;

/// Routes mounted at `/internal-classifiers`.
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
        .route("/", get(internal_classifier::list).post(internal_classifier::create))
        .route(
            "/{id}",
            get(internal_classifier::get_by_id).put(internal_classifier::update).delete(internal_classifier::delete),
        )
}
