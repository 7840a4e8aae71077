//! Cache-aside location resolution.
//!
//! # Request Flow
//!
//! 1. [`lookup`] the raw search text in the store
//! 2. **Hit**: return the stored row as-is
//! 3. **Miss**: geocode, then [`persist`] with insert-or-ignore, then return the new row
//!
//! Keys are compared byte-for-byte. Concurrent misses for the same key are not
//! coalesced: each may call the geocoder, and the store's unique key keeps a single row.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Location, NewLocation};
use crate::domain::providers::GeocodingProvider;
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

/// Outcome of a cache probe.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(Location),
    Miss,
}

/// Where a resolved location came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Served from the store without calling the geocoder.
    Cached(Location),
    /// Geocoded on this call and written back.
    Fetched(Location),
}

impl Resolution {
    pub fn location(&self) -> &Location {
        match self {
            Self::Cached(location) | Self::Fetched(location) => location,
        }
    }

    pub fn into_location(self) -> Location {
        match self {
            Self::Cached(location) | Self::Fetched(location) => location,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

/// Probes the store for `search_query`.
///
/// # Errors
///
/// Returns [`AppError::Store`] if the store fails; the caller never sees a `Miss` for a
/// failed probe.
pub async fn lookup(
    repository: &dyn LocationRepository,
    search_query: &str,
) -> Result<CacheLookup, AppError> {
    match repository.find_by_search_query(search_query).await? {
        Some(location) => {
            debug!(search_query, id = location.id, "Location cache HIT");
            Ok(CacheLookup::Hit(location))
        }
        None => {
            debug!(search_query, "Location cache MISS");
            Ok(CacheLookup::Miss)
        }
    }
}

/// Writes `new_location` with insert-or-ignore and returns the stored row.
///
/// When another writer got there first the insert yields no id; the existing row is
/// read back and returned instead, so the caller always receives an identified entity.
///
/// # Errors
///
/// Returns [`AppError::Store`] on database errors and [`AppError::Internal`] if the
/// conflicting row cannot be read back.
pub async fn persist(
    repository: &dyn LocationRepository,
    new_location: NewLocation,
) -> Result<Location, AppError> {
    if let Some(id) = repository.insert_or_ignore(&new_location).await? {
        info!(search_query = %new_location.search_query, id, "Stored location");
        return Ok(new_location.into_location(id));
    }

    warn!(
        search_query = %new_location.search_query,
        "Location already stored, reading back existing row"
    );

    repository
        .find_by_search_query(&new_location.search_query)
        .await?
        .ok_or_else(|| {
            AppError::internal(
                "Location vanished after conflicting insert",
                json!({ "search_query": new_location.search_query }),
            )
        })
}

/// Service resolving search text to a stored [`Location`].
pub struct LocationService {
    repository: Arc<dyn LocationRepository>,
    geocoder: Arc<dyn GeocodingProvider>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(
        repository: Arc<dyn LocationRepository>,
        geocoder: Arc<dyn GeocodingProvider>,
    ) -> Self {
        Self {
            repository,
            geocoder,
        }
    }

    /// Only the cache probe; no geocoding.
    ///
    /// # Errors
    ///
    /// See [`lookup`].
    pub async fn lookup(&self, search_query: &str) -> Result<CacheLookup, AppError> {
        lookup(self.repository.as_ref(), search_query).await
    }

    /// Resolves `search_query` from the store, geocoding and storing it on a miss.
    ///
    /// # Errors
    ///
    /// - [`AppError::Store`] if the probe or the write fails
    /// - [`AppError::Provider`] / [`AppError::Mapping`] if geocoding fails; nothing is
    ///   stored in that case
    pub async fn resolve(&self, search_query: &str) -> Result<Resolution, AppError> {
        if let CacheLookup::Hit(location) = self.lookup(search_query).await? {
            return Ok(Resolution::Cached(location));
        }

        let new_location = self.geocoder.geocode(search_query).await?;
        let location = persist(self.repository.as_ref(), new_location).await?;

        Ok(Resolution::Fetched(location))
    }

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the store is unreachable.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
