//! Dark Sky forecast client.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::http::{ProviderSettings, send_json};
use crate::domain::entities::Forecast;
use crate::domain::providers::WeatherProvider;
use crate::error::AppError;

const PROVIDER: &str = "weather";

/// `Www Mmm DD YYYY`, e.g. `Fri Jan 01 2021`.
const DAY_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Daily,
}

#[derive(Debug, Deserialize)]
struct Daily {
    #[serde(default)]
    data: Vec<DailyPoint>,
}

#[derive(Debug, Deserialize)]
struct DailyPoint {
    /// Unix seconds at the start of the day.
    time: i64,
    summary: String,
}

/// Renders epoch seconds as a UTC calendar date.
fn format_day(epoch_seconds: i64) -> Result<String, AppError> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|day| day.format(DAY_FORMAT).to_string())
        .ok_or_else(|| AppError::mapping(PROVIDER, format!("valid time (got {epoch_seconds})")))
}

fn map_forecasts(body: ForecastResponse) -> Result<Vec<Forecast>, AppError> {
    body.daily
        .data
        .into_iter()
        .map(|day| {
            Ok(Forecast {
                time: format_day(day.time)?,
                forecast: day.summary,
            })
        })
        .collect()
}

pub struct DarkSkyWeather {
    http: Client,
    settings: ProviderSettings,
}

impl DarkSkyWeather {
    pub fn new(http: Client, settings: ProviderSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl WeatherProvider for DarkSkyWeather {
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Forecast>, AppError> {
        debug!(latitude, longitude, "Fetching forecast");

        let url = self.settings.endpoint(&format!(
            "/forecast/{}/{},{}",
            self.settings.api_key, latitude, longitude
        ));

        let body: ForecastResponse = send_json(PROVIDER, self.http.get(url)).await?;
        map_forecasts(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(1609459200).unwrap(), "Fri Jan 01 2021");
        assert_eq!(format_day(1609545600).unwrap(), "Sat Jan 02 2021");
    }

    #[test]
    fn test_format_day_ignores_time_of_day() {
        // 2021-01-01T23:59:59Z
        assert_eq!(format_day(1609545599).unwrap(), "Fri Jan 01 2021");
    }

    #[test]
    fn test_map_forecasts_preserves_order_and_summary() {
        let body: ForecastResponse = serde_json::from_value(json!({
            "daily": {
                "data": [
                    { "time": 1609459200, "summary": "Clear" },
                    { "time": 1609545600, "summary": "Rain" }
                ]
            }
        }))
        .unwrap();

        let forecasts = map_forecasts(body).unwrap();

        assert_eq!(
            forecasts,
            vec![
                Forecast {
                    time: "Fri Jan 01 2021".to_string(),
                    forecast: "Clear".to_string(),
                },
                Forecast {
                    time: "Sat Jan 02 2021".to_string(),
                    forecast: "Rain".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_map_forecasts_empty_daily() {
        let body: ForecastResponse =
            serde_json::from_value(json!({ "daily": { "data": [] } })).unwrap();

        assert!(map_forecasts(body).unwrap().is_empty());
    }

    #[test]
    fn test_missing_daily_block_fails_to_decode() {
        let result = serde_json::from_value::<ForecastResponse>(json!({ "currently": {} }));
        assert!(result.is_err());
    }
}
