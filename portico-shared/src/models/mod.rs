pub mod auth;
pub mod errors;
pub mod message;
pub mod page;
pub mod password;
pub mod user;

pub use auth::{AuthResponse, Credentials, Session};
pub use errors::ApiErrorBody;
pub use message::GenericMessage;
pub use page::Page;
pub use password::{PasswordResetRequest, PasswordUpdate};
pub use user::{CreateUserRequest, User};
