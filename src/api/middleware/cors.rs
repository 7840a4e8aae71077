//! Cross-origin access for browser front-ends.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may issue `GET` requests; the API is read-only and carries no credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
