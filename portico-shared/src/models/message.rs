use serde::{Deserialize, Serialize};

/// Plain `{ "message": ... }` body used by most successful mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenericMessage {
    #[serde(default)]
    pub message: String,
}

impl GenericMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
