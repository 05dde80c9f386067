//! Classification of failed API calls.

use reqwest::StatusCode;
use shared::models::ApiErrorBody;
use std::collections::BTreeMap;
use thiserror::Error;

/// Every way a call to the REST API can fail, as far as the UI cares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 400 carrying per-field messages.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    /// The server refused the request and explained why.
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },

    /// The server answered with an error status and nothing usable.
    #[error("unexpected status {status}")]
    Unexpected { status: u16 },

    /// No response at all.
    #[error("network failure: {0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The request URL could not be built from the base and its parameters.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();

        if status == StatusCode::BAD_REQUEST
            && let Some(errors) = parsed.field_errors()
        {
            return Self::Validation(errors.clone());
        }

        match parsed.message() {
            Some(message) => Self::Rejected {
                status: status.as_u16(),
                message: message.to_string(),
            },
            None => Self::Unexpected {
                status: status.as_u16(),
            },
        }
    }

    /// Message written by the server, if any, for direct display.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Per-field messages, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Unexpected {
                status: status.as_u16(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
