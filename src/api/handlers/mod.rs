//! HTTP request handlers for API endpoints.

pub mod health;
pub mod location;
pub mod movies;
pub mod weather;
pub mod yelp;

pub use health::health_handler;
pub use location::location_handler;
pub use movies::movies_handler;
pub use weather::weather_handler;
pub use yelp::yelp_handler;
