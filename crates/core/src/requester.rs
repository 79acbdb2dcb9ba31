//! Requester type constants and validation.
//!
//! Requesters are the people or bodies that ask for a movement or a loan.

use crate::error::CoreError;

/// An individual researcher.
pub const TYPE_INVESTIGATOR: &str = "investigator";

/// An internal department of the institution.
pub const TYPE_DEPARTMENT: &str = "department";

/// An exhibition, internal or external.
pub const TYPE_EXHIBITION: &str = "exhibition";

/// All valid requester types.
pub const VALID_TYPES: &[&str] = &[TYPE_INVESTIGATOR, TYPE_DEPARTMENT, TYPE_EXHIBITION];

/// Validate that a requester type is one of [`VALID_TYPES`].
pub fn validate_requester_type(kind: &str) -> Result<(), CoreError> {
    if VALID_TYPES.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid requester type '{kind}'. Must be one of: {}",
            VALID_TYPES.join(", ")
        )))
    }
}
