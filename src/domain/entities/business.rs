use serde::Serialize;

/// A local business listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Business {
    pub name: String,
    pub image_url: Option<String>,
    /// Price tier such as `$$`; not every listing has one.
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub url: Option<String>,
}
