pub(crate) mod alert;
pub(crate) mod form_input;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod nav_link;
pub(crate) mod spinner;
pub(crate) mod submit_button;
pub(crate) mod user_list;
pub(crate) mod user_list_item;

// Re-export components for convenience
pub use alert::{Alert, AlertKind, failure_alert};
pub use form_input::FormInput;
pub use spinner::Spinner;
pub use submit_button::SubmitButton;
