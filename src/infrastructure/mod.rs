//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits in [`crate::domain`]:
//!
//! - [`persistence`] - PostgreSQL store adapter and location repositories
//! - [`providers`] - HTTP clients for geocoding, weather, business, and movie providers

pub mod persistence;
pub mod providers;
