//! Application error taxonomy and its HTTP mapping.
//!
//! Only validation failures reach the client with a structured body. Store,
//! provider, and mapping failures are logged here at the handler boundary and
//! answered with a fixed `500` message, so clients never learn which
//! collaborator failed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Body returned on every `500`.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failures talking to an external data provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status.
    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    /// The body was not the JSON shape the provider documents.
    #[error("{provider} response could not be decoded: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Classifies a `reqwest` failure for `provider`.
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                provider,
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                provider,
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                provider,
                source: err,
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request itself is malformed.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Connection or query failure in the persistent store.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A provider answered successfully but without a field we need.
    #[error("{provider} response has no {field}")]
    Mapping {
        provider: &'static str,
        field: String,
    },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn mapping(provider: &'static str, field: impl Into<String>) -> Self {
        Self::Mapping {
            provider,
            field: field.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Store(_) => "store_error",
            Self::Provider(_) => "provider_error",
            Self::Mapping { .. } => "mapping_error",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::bad_request("Invalid query parameters", json!(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%message, "rejected request");
                let body = ErrorBody {
                    error: ErrorInfo {
                        code: "validation_error",
                        message,
                        details,
                    },
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            err => {
                tracing::error!(kind = err.kind(), error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE).into_response()
            }
        }
    }
}
