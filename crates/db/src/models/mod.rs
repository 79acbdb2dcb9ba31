//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod artefact;
pub mod collection;
pub mod internal_classifier;
pub mod internal_movement;
pub mod loan;
pub mod physical_location;
pub mod requester;
pub mod shelf;
