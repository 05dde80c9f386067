use super::FormModel;
use super::validation::{all_filled, passwords_match};
use shared::models::CreateUserRequest;
use strum::{AsRefStr, EnumIter};

/// Inputs of the registration form, named as the server names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum SignUpField {
    Username,
    Email,
    Password,
    PasswordRepeat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
}

impl SignUpForm {
    /// Body for `POST /users`; the confirmation never leaves the browser.
    pub fn request(&self) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl FormModel for SignUpForm {
    type Field = SignUpField;
    type Output = String;

    fn set(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Username => self.username = value,
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
            SignUpField::PasswordRepeat => self.password_repeat = value,
        }
    }

    fn value(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Username => &self.username,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordRepeat => &self.password_repeat,
        }
    }

    fn can_submit(&self) -> bool {
        all_filled(&[&self.username, &self.email])
            && passwords_match(&self.password, &self.password_repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::forms::{Failure, Form, FormAction};
    use std::collections::BTreeMap;
    use strum::IntoEnumIterator;

    fn typed() -> Form<SignUpForm> {
        let mut form = Form::default();
        for (field, value) in [
            (SignUpField::Username, "user1"),
            (SignUpField::Email, "user1@mail.com"),
            (SignUpField::Password, "P4ssword"),
            (SignUpField::PasswordRepeat, "P4ssword"),
        ] {
            form.apply(FormAction::Input(field, value.to_string()));
        }
        form
    }

    fn fail_with(form: &mut Form<SignUpForm>, field: &str, message: &str) {
        form.apply(FormAction::Submit);
        let attempt = form.attempt();
        form.apply(FormAction::Completed {
            attempt,
            result: Err(ApiError::Validation(BTreeMap::from([(
                field.to_string(),
                message.to_string(),
            )]))),
        });
    }

    #[test]
    fn test_field_keys_match_server_names() {
        let keys: Vec<_> = SignUpField::iter().map(|field| field.as_ref().to_string()).collect();
        assert_eq!(keys, vec!["username", "email", "password", "passwordRepeat"]);
    }

    #[test]
    fn test_button_disabled_initially() {
        assert!(!Form::<SignUpForm>::default().submit_enabled());
    }

    #[test]
    fn test_button_enabled_when_passwords_match() {
        assert!(typed().submit_enabled());
    }

    #[test]
    fn test_button_disabled_when_passwords_differ() {
        let mut form = typed();
        form.apply(FormAction::Input(
            SignUpField::PasswordRepeat,
            "N3wP4ss".to_string(),
        ));
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_button_disabled_without_username() {
        let mut form = typed();
        form.apply(FormAction::Input(SignUpField::Username, String::new()));
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_request_sends_username_email_password() {
        let request = typed().model.request();
        assert_eq!(request.username, "user1");
        assert_eq!(request.email, "user1@mail.com");
        assert_eq!(request.password, "P4ssword");
    }

    #[test]
    fn test_double_click_sends_once() {
        let mut form = typed();
        assert!(form.apply(FormAction::Submit));
        assert!(!form.apply(FormAction::Submit));
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn test_each_field_error_displayed_and_cleared() {
        for (field, message) in [
            (SignUpField::Username, "Username cannot be null"),
            (SignUpField::Email, "Email cannot be null"),
            (SignUpField::Password, "Password cannot be null"),
        ] {
            let mut form = typed();
            fail_with(&mut form, field.as_ref(), message);
            assert_eq!(form.error_for(field), Some(message));

            let updated = format!("{}updated", form.value(field));
            form.apply(FormAction::Input(field, updated));
            assert_eq!(form.error_for(field), None, "{field:?}");
        }
    }

    #[test]
    fn test_editing_one_field_keeps_other_errors() {
        let mut form = typed();
        form.apply(FormAction::Submit);
        let attempt = form.attempt();
        form.apply(FormAction::Completed {
            attempt,
            result: Err(ApiError::Validation(BTreeMap::from([
                ("username".to_string(), "Username cannot be null".to_string()),
                ("email".to_string(), "E-mail in use".to_string()),
            ]))),
        });
        form.apply(FormAction::Input(SignUpField::Username, "user2".to_string()));
        assert_eq!(form.error_for(SignUpField::Username), None);
        assert_eq!(form.error_for(SignUpField::Email), Some("E-mail in use"));
    }

    #[test]
    fn test_generic_error_hidden_when_resubmitting() {
        let mut form = typed();
        form.apply(FormAction::Submit);
        let attempt = form.attempt();
        form.apply(FormAction::Completed {
            attempt,
            result: Err(ApiError::Network("connection refused".to_string())),
        });
        assert_eq!(form.failure(), Some(&Failure::Generic));

        form.apply(FormAction::Submit);
        assert_eq!(form.failure(), None);
        assert!(form.is_pending());
    }
}
