//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LocationService;
use crate::domain::providers::{BusinessSearchProvider, MovieSearchProvider, WeatherProvider};

/// Handles to the location cache and the stateless provider collaborators.
///
/// Built once at start-up; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService>,
    pub weather: Arc<dyn WeatherProvider>,
    pub business_search: Arc<dyn BusinessSearchProvider>,
    pub movie_search: Arc<dyn MovieSearchProvider>,
}

impl AppState {
    pub fn new(
        location_service: Arc<LocationService>,
        weather: Arc<dyn WeatherProvider>,
        business_search: Arc<dyn BusinessSearchProvider>,
        movie_search: Arc<dyn MovieSearchProvider>,
    ) -> Self {
        Self {
            location_service,
            weather,
            business_search,
            movie_search,
        }
    }
}
