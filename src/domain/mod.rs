//! Domain layer: entities and the trait seams the rest of the crate plugs into.
//!
//! - [`entities`] - Location plus the normalized provider shapes
//! - [`repositories`] - Persistence contracts (implemented in `crate::infrastructure::persistence`)
//! - [`providers`] - External data provider contracts (implemented in `crate::infrastructure::providers`)
//!
//! Nothing in here depends on axum, sqlx pools, or reqwest clients.

pub mod entities;
pub mod providers;
pub mod repositories;
