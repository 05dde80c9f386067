use super::FormModel;
use super::validation::{all_filled, passwords_match};
use shared::models::{PasswordResetRequest, PasswordUpdate};
use strum::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum ResetRequestField {
    Email,
}

/// Asks for a reset link to be mailed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordResetRequestForm {
    pub email: String,
}

impl PasswordResetRequestForm {
    pub fn request(&self) -> PasswordResetRequest {
        PasswordResetRequest {
            email: self.email.clone(),
        }
    }
}

impl FormModel for PasswordResetRequestForm {
    type Field = ResetRequestField;
    type Output = String;

    fn set(&mut self, field: ResetRequestField, value: String) {
        match field {
            ResetRequestField::Email => self.email = value,
        }
    }

    fn value(&self, field: ResetRequestField) -> &str {
        match field {
            ResetRequestField::Email => &self.email,
        }
    }

    fn can_submit(&self) -> bool {
        all_filled(&[&self.email])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum PasswordSetField {
    Password,
    PasswordRepeat,
}

/// Chooses the new password for the token carried in the reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordSetForm {
    pub password: String,
    pub password_repeat: String,
}

impl PasswordSetForm {
    pub fn update(&self) -> PasswordUpdate {
        PasswordUpdate {
            password: self.password.clone(),
        }
    }
}

impl FormModel for PasswordSetForm {
    type Field = PasswordSetField;
    type Output = String;

    fn set(&mut self, field: PasswordSetField, value: String) {
        match field {
            PasswordSetField::Password => self.password = value,
            PasswordSetField::PasswordRepeat => self.password_repeat = value,
        }
    }

    fn value(&self, field: PasswordSetField) -> &str {
        match field {
            PasswordSetField::Password => &self.password,
            PasswordSetField::PasswordRepeat => &self.password_repeat,
        }
    }

    fn can_submit(&self) -> bool {
        passwords_match(&self.password, &self.password_repeat)
    }
}
