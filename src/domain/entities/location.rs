//! Location entity: a geocoding result cached under the user's raw search text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stored geocoding result.
///
/// `search_query` is the cache key and is compared byte-for-byte: no trimming or
/// case folding happens anywhere, so `"Seattle"` and `"seattle "` are separate rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new Location instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let location = Location::new(
    ///     1,
    ///     "Denver".to_string(),
    ///     "Denver, CO, USA".to_string(),
    ///     39.74,
    ///     -104.98,
    /// );
    /// ```
    pub fn new(
        id: i64,
        search_query: String,
        formatted_query: String,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            search_query,
            formatted_query,
            latitude,
            longitude,
        }
    }
}

/// A geocoding result that has not been persisted yet.
///
/// Built by the geocoding provider right after a cache miss; it gets an `id` only once
/// the store has accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewLocation {
    /// Attaches the store-assigned identifier.
    pub fn into_location(self, id: i64) -> Location {
        Location::new(
            id,
            self.search_query,
            self.formatted_query,
            self.latitude,
            self.longitude,
        )
    }
}

/// Tables keyed by `location_id` that the administrative purge may touch.
///
/// The table name ends up in SQL text, so it can only ever come from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeTable {
    Weathers,
    Yelps,
    Movies,
}

impl PurgeTable {
    pub const ALL: [PurgeTable; 3] = [Self::Weathers, Self::Yelps, Self::Movies];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weathers => "weathers",
            Self::Yelps => "yelps",
            Self::Movies => "movies",
        }
    }
}

impl fmt::Display for PurgeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurgeTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| {
                format!("unknown table '{s}' (expected one of: weathers, yelps, movies)")
            })
    }
}
