//! Shelf entity model and DTOs.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shelves` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shelf {
    pub id: DbId,
    pub code: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shelf.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShelf {
    pub code: i32,
}

/// DTO for updating a shelf.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShelf {
    pub code: Option<i32>,
}
