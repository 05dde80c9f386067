use serde::{Deserialize, Serialize};

/// A user as listed by the directory and profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: u64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Stored profile image file name, if the user uploaded one.
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    /// Path of the profile image, falling back to the bundled placeholder.
    #[must_use]
    pub fn display_image(&self) -> String {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map_or_else(
                || "/assets/profile.png".to_string(),
                |image| format!("/images/{image}"),
            )
    }
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}
