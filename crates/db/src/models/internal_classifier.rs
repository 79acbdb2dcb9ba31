//! Internal classifier model and DTOs.
//!
//! A classifier is a name with an optional number; the pair is unique.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `internal_classifiers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternalClassifier {
    pub id: DbId,
    pub number: Option<i32>,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInternalClassifier {
    pub number: Option<i32>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInternalClassifier {
    pub number: Option<i32>,
    pub name: Option<String>,
}
