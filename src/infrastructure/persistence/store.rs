//! PostgreSQL store adapter.
//!
//! One [`Store`] is created at start-up and handed to every component that needs it.
//! With the default pool size of one it behaves as a single long-lived connection:
//! statements are serialized and a dropped connection is re-opened on next use.

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::AppError;

/// A value bound to a `$n` placeholder.
///
/// Caller-supplied data only ever reaches the database through these binds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlParam<'a> {
    Text(&'a str),
    Double(f64),
    BigInt(i64),
}

/// Shared handle to the relational store.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Opens the pool and eagerly establishes the first connection.
    ///
    /// # Errors
    ///
    /// Returns the connection error if the database cannot be reached at start-up.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .after_connect(|_conn, _meta| {
                Box::pin(async move {
                    debug!("Store connection established");
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;

        info!(max_connections, "Connected to store");

        Ok(Self { pool })
    }

    /// Wraps an existing pool (used by `#[sqlx::test]` fixtures).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Executes `sql` with `params` bound positionally and returns all result rows.
    ///
    /// Failures are reported to the error log before being returned; the store stays
    /// usable for later calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on connection or query failures.
    pub async fn execute<'q>(
        &self,
        sql: &'q str,
        params: &[SqlParam<'q>],
    ) -> Result<Vec<PgRow>, AppError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = match *param {
                SqlParam::Text(value) => query.bind(value),
                SqlParam::Double(value) => query.bind(value),
                SqlParam::BigInt(value) => query.bind(value),
            };
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, sql, "Store query failed");
            AppError::Store(e)
        })
    }
}
