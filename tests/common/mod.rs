#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use city_explorer::api::handlers::health_handler;
use city_explorer::api::routes::public_routes;
use city_explorer::application::services::LocationService;
use city_explorer::domain::entities::{Business, Forecast, Movie, NewLocation};
use city_explorer::domain::providers::{
    BusinessSearchProvider, GeocodingProvider, MovieSearchProvider, WeatherProvider,
};
use city_explorer::error::{AppError, ProviderError};
use city_explorer::state::AppState;

mod memory;

pub use memory::InMemoryLocationRepository;

/// Geocoder double that answers every query with a fixed place and counts calls.
pub struct FakeGeocoder {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Canned geocoding answers keyed by the raw query.
pub fn canned_location(search_query: &str) -> NewLocation {
    match search_query {
        "Denver" => NewLocation {
            search_query: search_query.to_string(),
            formatted_query: "Denver, CO, USA".to_string(),
            latitude: 39.74,
            longitude: -104.98,
        },
        _ => NewLocation {
            search_query: search_query.to_string(),
            formatted_query: format!("{search_query}, USA"),
            latitude: 30.2672,
            longitude: -97.7431,
        },
    }
}

#[async_trait]
impl GeocodingProvider for FakeGeocoder {
    async fn geocode(&self, search_query: &str) -> Result<NewLocation, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Suspend like a real network call so concurrent callers interleave.
        tokio::task::yield_now().await;

        if self.fail {
            return Err(ProviderError::Status {
                provider: "geocoding",
                status: 500,
            }
            .into());
        }

        Ok(canned_location(search_query))
    }
}

/// Provider double returning fixed results for weather, businesses, and movies.
#[derive(Default)]
pub struct StaticProviders {
    pub forecasts: Vec<Forecast>,
    pub businesses: Vec<Business>,
    pub movies: Vec<Movie>,
    pub fail: bool,
}

impl StaticProviders {
    fn check(&self, provider: &'static str) -> Result<(), AppError> {
        if self.fail {
            Err(ProviderError::Status {
                provider,
                status: 503,
            }
            .into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WeatherProvider for StaticProviders {
    async fn daily_forecast(&self, _lat: f64, _lng: f64) -> Result<Vec<Forecast>, AppError> {
        self.check("weather")?;
        Ok(self.forecasts.clone())
    }
}

#[async_trait]
impl BusinessSearchProvider for StaticProviders {
    async fn search(&self, _location: &str) -> Result<Vec<Business>, AppError> {
        self.check("business_search")?;
        Ok(self.businesses.clone())
    }
}

#[async_trait]
impl MovieSearchProvider for StaticProviders {
    async fn search(&self, _query: &str) -> Result<Vec<Movie>, AppError> {
        self.check("movie_search")?;
        Ok(self.movies.clone())
    }
}

pub struct TestContext {
    pub repository: Arc<InMemoryLocationRepository>,
    pub geocoder: Arc<FakeGeocoder>,
    pub state: AppState,
}

pub fn create_test_context(geocoder: FakeGeocoder, providers: StaticProviders) -> TestContext {
    let repository = Arc::new(InMemoryLocationRepository::new());
    let geocoder = Arc::new(geocoder);
    let providers = Arc::new(providers);

    let location_service = Arc::new(LocationService::new(
        repository.clone(),
        geocoder.clone(),
    ));

    let state = AppState::new(
        location_service,
        providers.clone(),
        providers.clone(),
        providers,
    );

    TestContext {
        repository,
        geocoder,
        state,
    }
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}
