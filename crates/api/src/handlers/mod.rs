//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input through `curator_core`, delegate to the matching
//! repository in `curator_db` and map errors via [`AppError`](crate::error::AppError).

pub mod artefact;
pub mod collection;
pub mod internal_classifier;
pub mod internal_movement;
pub mod loan;
pub mod physical_location;
pub mod requester;
pub mod shelf;

use curator_core::error::CoreError;

use crate::error::AppError;

/// Reject a blank display name for `entity`.
pub(crate) fn require_name(entity: &str, name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{entity} name must not be empty"
        ))));
    }
    Ok(())
}
