//! Shared query parameter types for API handlers.

use curator_core::types::DbId;
use serde::Deserialize;

/// Optional `?shelf_id=` filter used by the artefact listing.
#[derive(Debug, Default, Deserialize)]
pub struct ShelfFilterParams {
    pub shelf_id: Option<DbId>,
}
