//! Application layer services implementing business logic.
//!
//! - [`services::location_service::LocationService`] - Cache-aside location resolution

pub mod services;
