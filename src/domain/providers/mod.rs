//! Contracts for the external data providers.
//!
//! Each trait hides one HTTP provider behind a normalized result type. The concrete
//! clients live in `crate::infrastructure::providers`; handlers and services only see
//! these traits, so tests can swap in doubles.

use async_trait::async_trait;

use crate::domain::entities::{Business, Forecast, Movie, NewLocation};
use crate::error::AppError;

/// Turns free-form place text into coordinates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Geocodes `search_query` and returns the first match, still carrying the raw query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Provider`] on transport, status, or decode failures and
    /// [`AppError::Mapping`] when the provider found nothing.
    async fn geocode(&self, search_query: &str) -> Result<NewLocation, AppError>;
}

/// Daily forecast for a coordinate pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// One entry per forecast day, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Provider`] on transport, status, or decode failures.
    async fn daily_forecast(&self, latitude: f64, longitude: f64)
    -> Result<Vec<Forecast>, AppError>;
}

/// Local business search around a place name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessSearchProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Provider`] on transport, status, or decode failures.
    async fn search(&self, location: &str) -> Result<Vec<Business>, AppError>;
}

/// Movie metadata search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSearchProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Provider`] on transport, status, or decode failures.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, AppError>;
}
