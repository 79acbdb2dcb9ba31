//! Requester entity model and DTOs.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `requesters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Requester {
    pub id: DbId,
    /// One of `curator_core::requester::VALID_TYPES`.
    pub requester_type: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new requester.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequester {
    pub requester_type: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// DTO for updating an existing requester. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequester {
    pub requester_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
