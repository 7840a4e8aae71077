//! PostgreSQL implementation of the location repository.

use async_trait::async_trait;
use sqlx::{FromRow, Row};

use super::store::{SqlParam, Store};
use crate::domain::entities::{Location, NewLocation, PurgeTable};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

const SELECT_BY_SEARCH_QUERY: &str = r#"
    SELECT id, search_query, formatted_query, latitude, longitude
    FROM locations
    WHERE search_query = $1
"#;

// Relies on the UNIQUE constraint on search_query.
const INSERT_OR_IGNORE: &str = r#"
    INSERT INTO locations (search_query, formatted_query, latitude, longitude)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT DO NOTHING
    RETURNING id
"#;

const LIST_RECENT: &str = r#"
    SELECT id, search_query, formatted_query, latitude, longitude
    FROM locations
    ORDER BY created_at DESC, id DESC
    LIMIT $1
"#;

#[derive(FromRow)]
struct LocationRow {
    id: i64,
    search_query: String,
    formatted_query: String,
    latitude: f64,
    longitude: f64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(
            row.id,
            row.search_query,
            row.formatted_query,
            row.latitude,
            row.longitude,
        )
    }
}

/// PostgreSQL repository for the `locations` table and its `location_id` siblings.
#[derive(Clone)]
pub struct PgLocationRepository {
    store: Store,
}

impl PgLocationRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// `DELETE` statement for one purge table. The table name comes from [`PurgeTable`];
/// the id is always bound.
fn delete_by_location_id_sql(table: PurgeTable) -> String {
    format!(
        "DELETE FROM {} WHERE location_id = $1 RETURNING id",
        table.as_str()
    )
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn find_by_search_query(
        &self,
        search_query: &str,
    ) -> Result<Option<Location>, AppError> {
        let rows = self
            .store
            .execute(SELECT_BY_SEARCH_QUERY, &[SqlParam::Text(search_query)])
            .await?;

        rows.first()
            .map(LocationRow::from_row)
            .transpose()
            .map(|row| row.map(Location::from))
            .map_err(AppError::from)
    }

    async fn insert_or_ignore(&self, new_location: &NewLocation) -> Result<Option<i64>, AppError> {
        let rows = self
            .store
            .execute(
                INSERT_OR_IGNORE,
                &[
                    SqlParam::Text(&new_location.search_query),
                    SqlParam::Text(&new_location.formatted_query),
                    SqlParam::Double(new_location.latitude),
                    SqlParam::Double(new_location.longitude),
                ],
            )
            .await?;

        match rows.first() {
            Some(row) => Ok(Some(row.try_get::<i64, _>("id")?)),
            None => Ok(None),
        }
    }

    async fn delete_by_location_id(
        &self,
        table: PurgeTable,
        location_id: i64,
    ) -> Result<u64, AppError> {
        let sql = delete_by_location_id_sql(table);
        let rows = self
            .store
            .execute(&sql, &[SqlParam::BigInt(location_id)])
            .await?;

        Ok(rows.len() as u64)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Location>, AppError> {
        let rows = self
            .store
            .execute(LIST_RECENT, &[SqlParam::BigInt(limit)])
            .await?;

        rows.iter()
            .map(|row| LocationRow::from_row(row).map(Location::from))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.store.execute("SELECT 1", &[]).await?;
        Ok(())
    }
}
