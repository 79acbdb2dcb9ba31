//! Internal movement models and DTOs.
//!
//! A movement records an artefact going from one shelf cell to another
//! inside the institution. It is open (active) while both return fields are
//! null.

use curator_core::types::{DbId, EventDate, EventTime, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `internal_movements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternalMovement {
    pub id: DbId,
    pub movement_date: EventDate,
    pub movement_time: EventTime,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub artefact_id: DbId,
    pub from_physical_location_id: Option<DbId>,
    pub to_physical_location_id: Option<DbId>,
    pub reason: Option<String>,
    pub observations: Option<String>,
    pub requester_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movement joined with the artefact (and its internal classifier), both
/// cells and the requester.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternalMovementDetail {
    pub id: DbId,
    pub movement_date: EventDate,
    pub movement_time: EventTime,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub artefact_id: DbId,
    pub artefact_name: String,
    pub internal_classifier_id: Option<DbId>,
    pub internal_classifier_name: Option<String>,
    pub internal_classifier_number: Option<i32>,
    pub from_physical_location_id: Option<DbId>,
    pub from_shelf_code: Option<i32>,
    pub from_level: Option<i32>,
    pub from_column_letter: Option<String>,
    pub to_physical_location_id: Option<DbId>,
    pub to_shelf_code: Option<i32>,
    pub to_level: Option<i32>,
    pub to_column_letter: Option<String>,
    pub reason: Option<String>,
    pub observations: Option<String>,
    pub requester_id: Option<DbId>,
    pub requester_type: Option<String>,
    pub requester_first_name: Option<String>,
    pub requester_last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InternalMovementDetail {
    /// Whether this movement is still open.
    pub fn is_active(&self) -> bool {
        curator_core::movement::is_open(self.return_date, self.return_time)
    }
}

/// DTO for creating a movement.
///
/// When `from_physical_location_id` is omitted it is resolved from the
/// artefact's current placement. Movement date/time default to now.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInternalMovement {
    pub artefact_id: DbId,
    pub movement_date: Option<EventDate>,
    pub movement_time: Option<EventTime>,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub from_physical_location_id: Option<DbId>,
    pub to_physical_location_id: Option<DbId>,
    pub reason: Option<String>,
    pub observations: Option<String>,
    pub requester_id: Option<DbId>,
}

/// DTO for patching a movement. Supplying both return fields on an open
/// movement closes it. The artefact cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInternalMovement {
    pub movement_date: Option<EventDate>,
    pub movement_time: Option<EventTime>,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub from_physical_location_id: Option<DbId>,
    pub to_physical_location_id: Option<DbId>,
    pub reason: Option<String>,
    pub observations: Option<String>,
    pub requester_id: Option<DbId>,
}
