//! The Movie Database (TMDB) search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http::{ProviderSettings, send_json};
use crate::domain::entities::Movie;
use crate::domain::providers::MovieSearchProvider;
use crate::error::AppError;

const PROVIDER: &str = "movie_search";

/// Prefix for poster paths returned by TMDB.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w200_and_h300_bestv2";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    title: String,
    overview: Option<String>,
    vote_average: Option<f64>,
    vote_count: Option<i64>,
    poster_path: Option<String>,
    popularity: Option<f64>,
    release_date: Option<String>,
}

impl From<TmdbMovie> for Movie {
    fn from(m: TmdbMovie) -> Self {
        Movie {
            title: m.title,
            overview: m.overview,
            average_votes: m.vote_average,
            total_votes: m.vote_count,
            image_url: m.poster_path.map(|path| format!("{POSTER_BASE_URL}{path}")),
            popularity: m.popularity,
            released_on: m.release_date,
        }
    }
}

pub struct TmdbMovieSearch {
    http: Client,
    settings: ProviderSettings,
}

impl TmdbMovieSearch {
    pub fn new(http: Client, settings: ProviderSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl MovieSearchProvider for TmdbMovieSearch {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, AppError> {
        debug!(query, "Searching movies");

        let request = self
            .http
            .get(self.settings.endpoint("/3/search/movie"))
            .query(&[
                ("api_key", self.settings.api_key.as_str()),
                ("query", query),
            ]);

        let body: SearchResponse = send_json(PROVIDER, request).await?;
        Ok(body.results.into_iter().map(Movie::from).collect())
    }
}
