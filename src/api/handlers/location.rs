//! Handler for location resolution.

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::info;
use validator::Validate;

use crate::api::dto::LocationQuery;
use crate::domain::entities::Location;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves free-form place text to coordinates.
///
/// # Endpoint
///
/// `GET /location?data=<text>`
///
/// # Request Flow
///
/// 1. Look up `data` in the location cache (exact match, no normalization)
/// 2. **Hit**: respond with the stored row
/// 3. **Miss**: geocode, store with insert-or-ignore, respond with the stored row
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "search_query": "Seattle",
///   "formatted_query": "Seattle, WA, USA",
///   "latitude": 47.6062,
///   "longitude": -122.3321
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `data` is empty, 500 if the store or the geocoder fails.
pub async fn location_handler(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Location>, AppError> {
    query.validate()?;

    let resolution = state.location_service.resolve(&query.data).await?;

    info!(
        search_query = %query.data,
        id = resolution.location().id,
        cached = resolution.is_cached(),
        "Location resolved"
    );

    Ok(Json(resolution.into_location()))
}
