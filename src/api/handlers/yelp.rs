//! Handler for local business search.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::SearchQuery;
use crate::domain::entities::Business;
use crate::error::AppError;
use crate::state::AppState;

/// Businesses near the place named by the search text.
///
/// # Endpoint
///
/// `GET /yelp?data[search_query]=<text>`
///
/// # Response
///
/// ```json
/// [{ "name": "Pike Place Chowder", "image_url": "...", "price": "$$", "rating": 4.5, "url": "..." }]
/// ```
pub async fn yelp_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Business>>, AppError> {
    query.validate()?;

    let businesses = state.business_search.search(&query.search_query).await?;

    Ok(Json(businesses))
}
