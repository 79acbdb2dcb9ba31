//! Loan models and DTOs.

use curator_core::types::{DbId, EventDate, EventTime, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Loan {
    pub id: DbId,
    pub loan_date: EventDate,
    pub loan_time: EventTime,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub artefact_id: Option<DbId>,
    pub requester_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A loan joined with the artefact name, its internal classifier and the
/// requester.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoanDetail {
    pub id: DbId,
    pub loan_date: EventDate,
    pub loan_time: EventTime,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub artefact_id: Option<DbId>,
    pub artefact_name: Option<String>,
    pub internal_classifier_id: Option<DbId>,
    pub internal_classifier_name: Option<String>,
    pub internal_classifier_number: Option<i32>,
    pub requester_id: Option<DbId>,
    pub requester_type: Option<String>,
    pub requester_first_name: Option<String>,
    pub requester_last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a loan. Loan date/time default to now.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLoan {
    pub loan_date: Option<EventDate>,
    pub loan_time: Option<EventTime>,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub artefact_id: Option<DbId>,
    pub requester_id: Option<DbId>,
}

/// DTO for patching a loan. The artefact cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLoan {
    pub loan_date: Option<EventDate>,
    pub loan_time: Option<EventTime>,
    pub return_date: Option<EventDate>,
    pub return_time: Option<EventTime>,
    pub requester_id: Option<DbId>,
}
