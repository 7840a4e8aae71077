//! Yelp Fusion business search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http::{ProviderSettings, send_json};
use crate::domain::entities::Business;
use crate::domain::providers::BusinessSearchProvider;
use crate::error::AppError;

const PROVIDER: &str = "business_search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<YelpBusiness>,
}

#[derive(Debug, Deserialize)]
struct YelpBusiness {
    name: String,
    image_url: Option<String>,
    price: Option<String>,
    rating: Option<f64>,
    url: Option<String>,
}

impl From<YelpBusiness> for Business {
    fn from(b: YelpBusiness) -> Self {
        Business {
            name: b.name,
            image_url: b.image_url,
            price: b.price,
            rating: b.rating,
            url: b.url,
        }
    }
}

pub struct YelpBusinessSearch {
    http: Client,
    settings: ProviderSettings,
}

impl YelpBusinessSearch {
    pub fn new(http: Client, settings: ProviderSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl BusinessSearchProvider for YelpBusinessSearch {
    async fn search(&self, location: &str) -> Result<Vec<Business>, AppError> {
        debug!(location, "Searching businesses");

        let request = self
            .http
            .get(self.settings.endpoint("/v3/businesses/search"))
            .bearer_auth(&self.settings.api_key)
            .query(&[("location", location)]);

        let body: SearchResponse = send_json(PROVIDER, request).await?;
        Ok(body.businesses.into_iter().map(Business::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_business_mapping_keeps_optional_fields() {
        let body: SearchResponse = serde_json::from_value(json!({
            "total": 2,
            "businesses": [
                {
                    "id": "abc",
                    "name": "Pike Place Chowder",
                    "image_url": "https://s3-media.example.com/chowder.jpg",
                    "price": "$$",
                    "rating": 4.5,
                    "url": "https://www.yelp.com/biz/pike-place-chowder"
                },
                { "name": "Hole in the Wall", "rating": 3.0 }
            ]
        }))
        .unwrap();

        let businesses: Vec<Business> = body.businesses.into_iter().map(Business::from).collect();

        assert_eq!(businesses.len(), 2);
        assert_eq!(businesses[0].name, "Pike Place Chowder");
        assert_eq!(businesses[0].price.as_deref(), Some("$$"));
        assert_eq!(businesses[0].rating, Some(4.5));
        assert_eq!(businesses[1].name, "Hole in the Wall");
        assert!(businesses[1].price.is_none());
        assert!(businesses[1].image_url.is_none());
    }
}
