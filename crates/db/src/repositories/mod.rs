//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Lifecycle operations open their
//! own transaction; helpers that must run inside a caller's transaction take
//! `&mut PgConnection` instead.

pub mod artefact_repo;
pub mod collection_repo;
pub mod internal_classifier_repo;
pub mod internal_movement_repo;
pub mod loan_repo;
pub mod physical_location_repo;
pub mod requester_repo;
pub mod shelf_repo;

pub use artefact_repo::ArtefactRepo;
pub use collection_repo::CollectionRepo;
pub use internal_classifier_repo::InternalClassifierRepo;
pub use internal_movement_repo::InternalMovementRepo;
pub use loan_repo::LoanRepo;
pub use physical_location_repo::PhysicalLocationRepo;
pub use requester_repo::RequesterRepo;
pub use shelf_repo::ShelfRepo;
