//! Route definitions for the `/loans` resource.
//!
//! Every write here flips the artefact's `available` flag.

use axum::routing::get;
use axum::Router;

use crate::handlers::loan;
use crate::state::AppState;

/// Routes mounted at `/loans`.
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
        .route("/", get(loan::list).post(loan::create))
        .route(
            "/{id}",
            get(loan::get_by_id).put(loan::update).delete(loan::delete),
        )
}
