use serde::{Deserialize, Serialize};

/// Login credentials posted to the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The logged-in user as kept in client storage between page loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        let AuthResponse {
            id,
            username,
            email,
            image,
        } = response;
        Self {
            id,
            username,
            email,
            image,
        }
    }
}
