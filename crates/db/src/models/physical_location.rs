//! Physical location (shelf cell) models.
//!
//! Cells are created together with their shelf and are read-only after
//! that, so there are no create/update DTOs here.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `physical_locations` table joined with its shelf code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhysicalLocation {
    pub id: DbId,
    pub shelf_id: DbId,
    pub shelf_code: i32,
    pub level: i32,
    pub column_letter: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query filter for listing cells.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhysicalLocationFilter {
    pub shelf_id: Option<DbId>,
}

/// Query parameters addressing a single cell on a shelf.
#[derive(Debug, Clone, Deserialize)]
pub struct CellAddress {
    pub shelf_id: DbId,
    pub level: i32,
    pub column_letter: String,
}
