//! Artefact entity model and DTOs.

use curator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artefacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artefact {
    pub id: DbId,
    pub name: String,
    pub material: Option<String>,
    pub observation: Option<String>,
    pub description: Option<String>,
    /// `false` while the artefact is out on loan.
    pub available: bool,
    /// Current cell, mirrored from the most recent internal movement.
    pub physical_location_id: Option<DbId>,
    pub collection_id: Option<DbId>,
    pub internal_classifier_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artefact.
///
/// An initial location may be given; after creation the location only
/// changes through internal movements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArtefact {
    pub name: String,
    pub material: Option<String>,
    pub observation: Option<String>,
    pub description: Option<String>,
    pub physical_location_id: Option<DbId>,
    pub collection_id: Option<DbId>,
    pub internal_classifier_id: Option<DbId>,
}

/// DTO for the generic artefact update.
///
/// Has no `available` or `physical_location_id` field; those are written by
/// the loan and movement lifecycles only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtefact {
    pub name: Option<String>,
    pub material: Option<String>,
    pub observation: Option<String>,
    pub description: Option<String>,
    pub collection_id: Option<DbId>,
    pub internal_classifier_id: Option<DbId>,
}
