//! Handler for daily forecasts.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::WeatherQuery;
use crate::domain::entities::Forecast;
use crate::error::AppError;
use crate::state::AppState;

/// Daily forecast for a coordinate pair.
///
/// # Endpoint
///
/// `GET /weather?data[latitude]=..&data[longitude]=..`
///
/// # Response
///
/// ```json
/// [{ "time": "Fri Jan 01 2021", "forecast": "Clear throughout the day." }]
/// ```
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Vec<Forecast>>, AppError> {
    query.validate()?;

    let forecasts = state
        .weather
        .daily_forecast(query.latitude, query.longitude)
        .await?;

    Ok(Json(forecasts))
}
