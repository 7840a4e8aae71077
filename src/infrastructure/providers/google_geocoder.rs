//! Google Geocoding API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http::{ProviderSettings, send_json};
use crate::domain::entities::NewLocation;
use crate::domain::providers::GeocodingProvider;
use crate::error::AppError;

const PROVIDER: &str = "geocoding";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Maps the first geocoding result onto a [`NewLocation`] carrying the raw query.
fn map_location(search_query: &str, body: GeocodeResponse) -> Result<NewLocation, AppError> {
    let first = body.results.into_iter().next().ok_or_else(|| {
        debug!(status = ?body.status, "Geocoding returned no results");
        AppError::mapping(PROVIDER, "results[0]")
    })?;

    Ok(NewLocation {
        search_query: search_query.to_string(),
        formatted_query: first.formatted_address,
        latitude: first.geometry.location.lat,
        longitude: first.geometry.location.lng,
    })
}

pub struct GoogleGeocoder {
    http: Client,
    settings: ProviderSettings,
}

impl GoogleGeocoder {
    pub fn new(http: Client, settings: ProviderSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl GeocodingProvider for GoogleGeocoder {
    async fn geocode(&self, search_query: &str) -> Result<NewLocation, AppError> {
        debug!(search_query, "Geocoding");

        let request = self
            .http
            .get(self.settings.endpoint("/maps/api/geocode/json"))
            .query(&[
                ("address", search_query),
                ("key", self.settings.api_key.as_str()),
            ]);

        let body: GeocodeResponse = send_json(PROVIDER, request).await?;
        map_location(search_query, body)
    }
}
