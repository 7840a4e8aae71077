//! Entities exchanged between handlers, services, and providers.
//!
//! - [`Location`] - A persisted geocoding result (the only stored entity)
//! - [`NewLocation`] - A geocoding result that has not been stored yet
//! - [`Forecast`], [`Business`], [`Movie`] - Normalized provider results, never stored
//!   by the request path

pub mod business;
pub mod forecast;
pub mod location;
pub mod movie;

pub use business::Business;
pub use forecast::Forecast;
pub use location::{Location, NewLocation, PurgeTable};
pub use movie::Movie;
