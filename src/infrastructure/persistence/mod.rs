//! Persistent store adapter and repository implementations.
//!
//! - [`Store`] - The process-wide PostgreSQL handle; every statement goes through it
//! - [`PgLocationRepository`] - Location cache rows on top of [`Store`]

pub mod pg_location_repository;
pub mod store;

pub use pg_location_repository::PgLocationRepository;
pub use store::{SqlParam, Store};
