use serde::Serialize;

/// One day of a weather forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Calendar date, e.g. `Fri Jan 01 2021`.
    pub time: String,
    pub forecast: String,
}
