//! Data Transfer Objects for the HTTP surface.
//!
//! Query parameters follow the bracketed form-encoding used by browser clients:
//! `data=<text>` for locations and `data[field]=<value>` for the other endpoints.

pub mod health;
pub mod query;

pub use query::{LocationQuery, SearchQuery, WeatherQuery};
