use serde::{Deserialize, Serialize};

/// Asks the server to mail a password reset link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// New password sent together with the reset token in the path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordUpdate {
    pub password: String,
}
