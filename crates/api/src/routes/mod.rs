pub mod artefact;
pub mod collection;
pub mod health;
pub mod internal_classifier;
pub mod internal_movement;
pub mod loan;
pub mod physical_location;
pub mod requester;
pub mod shelf;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artefacts                                       list (cached), create
/// /artefacts/{id}                                  get, update, delete
///
/// /collections                                     list, create
/// /collections/{id}                                get, update, delete
///
/// /internal-classifiers                            list, create
/// /internal-classifiers/{id}                       get, update, delete
///
/// /shelves                                         list, create (provisions cells)
/// /shelves/{id}                                    get, update, delete
///
/// /physical-locations                              list (?shelf_id=)
/// /physical-locations/lookup                       find cell by address
/// /physical-locations/{id}                         get
///
/// /requesters                                      list, create
/// /requesters/{id}                                 get, update, delete
///
/// /internal-movements                              list, create
/// /internal-movements/{id}                         get, update (close), delete
/// /internal-movements/artefact/{artefact_id}        history
/// /internal-movements/artefact/{artefact_id}/active active movement
///
/// /loans                                           list, create
/// /loans/{id}                                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artefacts", artefact::router())
        .nest("/collections", collection::router())
        .nest("/internal-classifiers", internal_classifier::router())
        .nest("/shelves", shelf::router())
        .nest("/physical-locations", physical_location::router())
        .nest("/requesters", requester::router())
        .nest("/internal-movements", internal_movement::router())
        .nest("/loans", loan::router())
}
