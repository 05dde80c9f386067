use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body returned by the server for any non-2xx response.
///
/// Validation failures (HTTP 400) carry a `validationErrors` map keyed by
/// request field name; other failures usually carry only `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Human readable, already localized message.
    #[serde(default)]
    pub message: Option<String>,

    /// Request path that produced the error.
    #[serde(default)]
    pub path: Option<String>,

    /// Server timestamp in epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,

    /// Per-field validation messages.
    #[serde(default)]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ApiErrorBody {
    /// Returns the validation map when it holds at least one entry.
    #[must_use]
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        self.validation_errors
            .as_ref()
            .filter(|errors| !errors.is_empty())
    }

    /// Returns the message when it is present and not blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.message(), self.field_errors()) {
            (Some(message), _) => f.write_str(message),
            (None, Some(errors)) => write!(f, "{} invalid field(s)", errors.len()),
            (None, None) => f.write_str("unknown error"),
        }
    }
}
