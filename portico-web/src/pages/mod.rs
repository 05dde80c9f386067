mod activation;
mod home;
mod login;
mod not_found;
mod password_reset_request;
mod password_reset_set;
mod sign_up;
mod user;

pub use activation::ActivationPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use password_reset_request::PasswordResetRequestPage;
pub use password_reset_set::PasswordResetSetPage;
pub use sign_up::SignUpPage;
pub use user::UserPage;
