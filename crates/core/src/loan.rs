//! Loan lifecycle rules.
//!
//! Loans track an artefact leaving the institution. Unlike internal
//! movements they govern the artefact's `available` flag rather than its
//! location.

use crate::error::CoreError;
use crate::types::DbId;

/// Check that an artefact can be lent out.
///
/// Fails with [`CoreError::ArtefactUnavailable`] when the artefact is
/// already on loan.
pub fn ensure_available(artefact_id: DbId, available: bool) -> Result<(), CoreError> {
    if available {
        Ok(())
    } else {
        Err(CoreError::ArtefactUnavailable { id: artefact_id })
    }
}

/// Whether a loan references an artefact whose availability it governs.
///
/// A zero id is treated the same as no artefact.
pub fn governs_artefact(artefact_id: Option<DbId>) -> Option<DbId> {
    artefact_id.filter(|id| *id != 0)
}
