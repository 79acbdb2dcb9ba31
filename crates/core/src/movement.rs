//! Internal movement lifecycle rules.
//!
//! A movement is ACTIVE while both return fields are null and CLOSED once
//! both are set. At most one movement per artefact may be active; the
//! artefact's stored location always mirrors the destination of its most
//! recent movement. The functions here decide *what* the repository layer
//! writes; they never touch the database themselves.

use crate::types::{DbId, EventDate, EventTime, Timestamp};

/// Reason recorded on automatically generated return movements.
pub const RETURN_REASON: &str = "Return to original location";

/// Observation recorded on automatically generated return movements.
pub const RETURN_OBSERVATIONS: &str = "Automatic return-to-origin movement";

/// Whether a movement (or loan) with these return fields is still open.
pub fn is_open(return_date: Option<EventDate>, return_time: Option<EventTime>) -> bool {
    return_date.is_none() && return_time.is_none()
}

/// Whether applying a patch transitions an open movement to closed.
///
/// Only an open row whose patch supplies *both* return fields counts as a
/// close. Supplying one field, or patching an already closed row, is a plain
/// field edit.
pub fn is_closing(
    existing_return_date: Option<EventDate>,
    existing_return_time: Option<EventTime>,
    patch_return_date: Option<EventDate>,
    patch_return_time: Option<EventTime>,
) -> bool {
    is_open(existing_return_date, existing_return_time)
        && patch_return_date.is_some()
        && patch_return_time.is_some()
}

/// Where an artefact currently is, as seen by a new movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentPlacement {
    /// The artefact has an active movement; `to` is its destination.
    ActiveMovement { to: Option<DbId> },
    /// No active movement; the location stored on the artefact row.
    Stored(Option<DbId>),
}

/// Resolve the `from` location of a new movement.
///
/// A caller-supplied origin always wins. Otherwise the artefact is moved
/// from wherever it currently is.
pub fn resolve_from_location(requested: Option<DbId>, placement: CurrentPlacement) -> Option<DbId> {
    requested.or(match placement {
        CurrentPlacement::ActiveMovement { to } => to,
        CurrentPlacement::Stored(location) => location,
    })
}

/// The synthetic leg that takes an artefact back to its original location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnLeg {
    pub from: Option<DbId>,
    pub to: Option<DbId>,
}

/// Decide whether closing a movement needs a return-to-origin leg.
///
/// `vacated` is the destination of the movement being closed and `original`
/// is the origin of the artefact's first recorded movement. No leg is needed
/// when the artefact already sits at its original location.
pub fn plan_return_to_origin(vacated: Option<DbId>, original: Option<DbId>) -> Option<ReturnLeg> {
    if vacated == original {
        None
    } else {
        Some(ReturnLeg {
            from: vacated,
            to: original,
        })
    }
}

/// Split a UTC timestamp into the date/time pair stored on movement rows.
pub fn split_timestamp(ts: Timestamp) -> (EventDate, EventTime) {
    let naive = ts.naive_utc();
    (naive.date(), naive.time())
}
