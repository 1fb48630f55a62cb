// Error type for the API client. The binary and UI wrap these in
// `anyhow` for display, but library callers can match on the variant.

use reqwest::StatusCode;
use thiserror::Error;

/// Fixed message reported when the health check fails for any reason.
pub const BACKEND_UNAVAILABLE: &str = "Backend is not responding";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("Invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("Http Error {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was received but does not match the expected record.
    #[error("Unexpected response shape from {url}")]
    UnexpectedShape {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", BACKEND_UNAVAILABLE)]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failed call, when the backend produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
