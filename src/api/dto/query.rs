//! Query-string DTOs.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// `GET /location?data=<text>`
///
/// The text is used as the cache key exactly as received.
#[derive(Debug, Deserialize, Validate)]
pub struct LocationQuery {
    #[validate(length(min = 1, message = "data must not be empty"))]
    pub data: String,
}

/// `GET /weather?data[latitude]=..&data[longitude]=..`
///
/// Other `data[..]` fields a client sends along (usually the whole location object)
/// are ignored.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "finite_coordinates"))]
pub struct WeatherQuery {
    #[serde(rename = "data[latitude]")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[serde(rename = "data[longitude]")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

// `NaN` slips through range checks, so it is rejected here.
fn finite_coordinates(query: &WeatherQuery) -> Result<(), ValidationError> {
    if query.latitude.is_finite() && query.longitude.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_coordinate")
            .with_message("coordinates must be finite numbers".into()))
    }
}

/// `GET /movies?data[search_query]=..` and `GET /yelp?data[search_query]=..`
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(rename = "data[search_query]")]
    #[validate(length(min = 1, message = "search_query must not be empty"))]
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse<T: serde::de::DeserializeOwned>(qs: &str) -> T {
        let uri: Uri = format!("http://localhost/?{qs}").parse().unwrap();
        Query::<T>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_weather_query_reads_bracketed_keys() {
        let query: WeatherQuery =
            parse("data%5Blatitude%5D=47.6062&data%5Blongitude%5D=-122.3321&data%5Bid%5D=4");

        assert_eq!(query.latitude, 47.6062);
        assert_eq!(query.longitude, -122.3321);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_weather_query_rejects_out_of_range() {
        let query: WeatherQuery = parse("data%5Blatitude%5D=91&data%5Blongitude%5D=0");
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_weather_query_rejects_non_finite() {
        for qs in [
            "data%5Blatitude%5D=NaN&data%5Blongitude%5D=NaN",
            "data%5Blatitude%5D=10&data%5Blongitude%5D=inf",
            "data%5Blatitude%5D=-inf&data%5Blongitude%5D=0",
        ] {
            let query: WeatherQuery = parse(qs);
            assert!(query.validate().is_err(), "{qs} should be rejected");
        }
    }

    #[test]
    fn test_search_query_reads_bracketed_key() {
        let query: SearchQuery =
            parse("data%5Bsearch_query%5D=Seattle&data%5Blatitude%5D=47.6");
        assert_eq!(query.search_query, "Seattle");
    }

    #[test]
    fn test_location_query_keeps_raw_text() {
        let query: LocationQuery = parse("data=Seattle%20");
        assert_eq!(query.data, "Seattle ");

        let empty: LocationQuery = parse("data=");
        assert!(empty.validate().is_err());
    }
}
