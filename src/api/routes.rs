//! API route configuration.

use crate::api::handlers::{location_handler, movies_handler, weather_handler, yelp_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public data routes.
///
/// # Endpoints
///
/// - `GET /location` - Cached geocoding of `data`
/// - `GET /weather`  - Daily forecast for `data[latitude]` / `data[longitude]`
/// - `GET /movies`   - Movie search for `data[search_query]`
/// - `GET /yelp`     - Business search for `data[search_query]`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/location", get(location_handler))
        .route("/weather", get(weather_handler))
        .route("/movies", get(movies_handler))
        .route("/yelp", get(yelp_handler))
}
