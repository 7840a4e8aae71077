//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`:
//!
//! - [`LocationRepository`] - Location cache rows and the administrative purge
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod location_repository;

pub use location_repository::LocationRepository;

#[cfg(test)]
pub use location_repository::MockLocationRepository;
