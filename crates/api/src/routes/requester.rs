//! Route definitions for the `/requesters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::requester;
use crate::state::AppState;

/// Routes mounted at `/requesters`.
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
        .route("/", get(requester::list).post(requester::create))
        .route(
            "/{id}",
            get(requester::get_by_id).put(requester::update).delete(requester::delete),
        )
}
