//! Shared HTTP plumbing for provider clients.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::warn;

use crate::error::{AppError, ProviderError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Endpoint and credential for one provider.
#[derive(Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderSettings {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Joins `path` onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Builds the outbound client shared by all providers.
///
/// No request timeout is set: a slow provider only holds up its own request.
///
/// # Errors
///
/// Fails if the TLS backend cannot be initialised.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Sends `request` and decodes a 2xx JSON body as `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, AppError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        warn!(provider, status = status.as_u16(), "Provider returned an error status");
        return Err(ProviderError::Status {
            provider,
            status: status.as_u16(),
        }
        .into());
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e).into())
}
