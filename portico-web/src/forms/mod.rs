//! Form state machines shared by every page that submits to the API.

mod form;
pub mod login;
pub mod password_reset;
pub mod sign_up;
pub mod validation;

pub use form::{Failure, Form, FormAction, FormModel, use_submission};
