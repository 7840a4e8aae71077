//! Repository trait for cached locations.

use crate::domain::entities::{Location, NewLocation, PurgeTable};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for geocoding results keyed by raw search text.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLocationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Finds the row whose `search_query` equals `search_query` byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_search_query(&self, search_query: &str)
    -> Result<Option<Location>, AppError>;

    /// Inserts a row unless one already exists for the same `search_query`.
    ///
    /// Returns the generated id, or `None` when the insert was ignored because of a
    /// conflicting row. A conflict is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn insert_or_ignore(&self, new_location: &NewLocation) -> Result<Option<i64>, AppError>;

    /// Deletes every row of `table` that references `location_id`.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete_by_location_id(
        &self,
        table: PurgeTable,
        location_id: i64,
    ) -> Result<u64, AppError>;

    /// Lists the most recently stored locations, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Location>, AppError>;

    /// Round-trips a trivial statement to prove the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the store does not answer.
    async fn ping(&self) -> Result<(), AppError>;
}
