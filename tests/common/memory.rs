use async_trait::async_trait;
use std::sync::Mutex;

use city_explorer::domain::entities::{Location, NewLocation, PurgeTable};
use city_explorer::domain::repositories::LocationRepository;
use city_explorer::error::AppError;

#[derive(Default)]
struct Rows {
    locations: Vec<Location>,
    next_id: i64,
}

/// A [`LocationRepository`] over a mutex-guarded vector.
///
/// Mirrors the `locations` table's insert-or-ignore semantics on the unique
/// `search_query` key. It has no sibling tables, so purges remove nothing.
#[derive(Default)]
pub struct InMemoryLocationRepository {
    rows: Mutex<Rows>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows stored under exactly `search_query`.
    pub fn count_for(&self, search_query: &str) -> usize {
        self.rows
            .lock()
            .unwrap()
            .locations
            .iter()
            .filter(|l| l.search_query == search_query)
            .count()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find_by_search_query(
        &self,
        search_query: &str,
    ) -> Result<Option<Location>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .locations
            .iter()
            .find(|l| l.search_query == search_query)
            .cloned())
    }

    async fn insert_or_ignore(&self, new_location: &NewLocation) -> Result<Option<i64>, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .locations
            .iter()
            .any(|l| l.search_query == new_location.search_query)
        {
            return Ok(None);
        }

        rows.next_id += 1;
        let id = rows.next_id;
        rows.locations.push(new_location.clone().into_location(id));

        Ok(Some(id))
    }

    async fn delete_by_location_id(
        &self,
        _table: PurgeTable,
        _location_id: i64,
    ) -> Result<u64, AppError> {
        Ok(0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Location>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .locations
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
