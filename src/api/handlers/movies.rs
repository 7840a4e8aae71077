//! Handler for movie search.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::SearchQuery;
use crate::domain::entities::Movie;
use crate::error::AppError;
use crate::state::AppState;

/// Movies matching the place's search text.
///
/// # Endpoint
///
/// `GET /movies?data[search_query]=<text>`
///
/// # Response
///
/// ```json
/// [{
///   "title": "Sleepless in Seattle",
///   "overview": "...",
///   "average_votes": 6.8,
///   "total_votes": 1830,
///   "image_url": "https://image.tmdb.org/t/p/w200_and_h300_bestv2/abc.jpg",
///   "popularity": 11.2,
///   "released_on": "1993-06-24"
/// }]
/// ```
pub async fn movies_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    query.validate()?;

    let movies = state.movie_search.search(&query.search_query).await?;

    Ok(Json(movies))
}
