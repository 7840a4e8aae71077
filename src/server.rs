//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, migrations, provider clients, and the Axum server
//! lifecycle.

use crate::application::services::LocationService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgLocationRepository, Store};
use crate::infrastructure::providers::{
    DarkSkyWeather, GoogleGeocoder, TmdbMovieSearch, YelpBusinessSearch, http_client,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL store (one long-lived handle for the whole process)
/// - Apply migrations
/// - Provider clients sharing one HTTP client
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Store::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(store.pool())
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let state = build_state(&config, store)?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires repositories and provider clients into [`AppState`].
///
/// # Errors
///
/// Returns an error if the outbound HTTP client cannot be built.
pub fn build_state(config: &Config, store: Store) -> Result<AppState> {
    let http = http_client().context("Failed to build HTTP client")?;

    let repository = Arc::new(PgLocationRepository::new(store));
    let geocoder = Arc::new(GoogleGeocoder::new(http.clone(), config.geocoding.clone()));
    let location_service = Arc::new(LocationService::new(repository, geocoder));

    Ok(AppState::new(
        location_service,
        Arc::new(DarkSkyWeather::new(http.clone(), config.weather.clone())),
        Arc::new(YelpBusinessSearch::new(
            http.clone(),
            config.business_search.clone(),
        )),
        Arc::new(TmdbMovieSearch::new(http, config.movie_search.clone())),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
