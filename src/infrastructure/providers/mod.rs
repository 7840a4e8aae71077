//! HTTP clients for the external data providers.
//!
//! Every client pairs a private `serde` payload type (the provider's documented shape)
//! with a pure mapping function into a domain entity. Clients share one
//! `reqwest::Client`.
//!
//! - [`GoogleGeocoder`] - [`crate::domain::providers::GeocodingProvider`]
//! - [`DarkSkyWeather`] - [`crate::domain::providers::WeatherProvider`]
//! - [`YelpBusinessSearch`] - [`crate::domain::providers::BusinessSearchProvider`]
//! - [`TmdbMovieSearch`] - [`crate::domain::providers::MovieSearchProvider`]

mod darksky_weather;
mod google_geocoder;
mod http;
mod tmdb_movies;
mod yelp_business;

pub use darksky_weather::DarkSkyWeather;
pub use google_geocoder::GoogleGeocoder;
pub use http::{ProviderSettings, http_client};
pub use tmdb_movies::{POSTER_BASE_URL, TmdbMovieSearch};
pub use yelp_business::YelpBusinessSearch;
