//! Domain rules for the collection inventory.
//!
//! Pure functions and types only; persistence lives in `curator_db` and the
//! HTTP surface in `curator_api`.

pub mod error;
pub mod loan;
pub mod location;
pub mod movement;
pub mod requester;
pub mod types;
