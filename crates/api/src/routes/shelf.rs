//! Route definitions for the `/shelves` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shelf;
use crate::state::AppState;

/// Routes mounted at `/shelves`. Creating a shelf also creates its cells.
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
        .route("/", get(shelf::list).post(shelf::create))
        .route(
            "/{id}",
            get(shelf::get_by_id).put(shelf::update).delete(shelf::delete),
        )
}
