//! Collection entity model and DTOs.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `collections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collection {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollection {
    pub name: String,
    pub description: Option<String>,
    pub year: Option<i32>,
}

/// DTO for updating an existing collection. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCollection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
}
