//! Client-side checks that gate the submit buttons.
//!
//! The server owns the real validation rules; these only decide whether a
//! form is complete enough to send and whether the confirmation matches.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
}

/// Validates that a required field has a value.
///
/// Whitespace counts as a value: the server decides whether it is acceptable.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
///
/// # Validation rules
/// - Confirmation must not be empty
/// - Confirmation must match the password exactly
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    validate_required(confirm_password)?;
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// True when every value is non-empty.
pub fn all_filled(values: &[&str]) -> bool {
    values.iter().all(|value| validate_required(value).is_ok())
}

/// True when both password inputs are filled in and equal.
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    validate_required(password).is_ok()
        && validate_confirm_password(confirm_password, password).is_ok()
}

/// True when the confirmation has been typed and differs from the password.
pub fn shows_mismatch(password: &str, confirm_password: &str) -> bool {
    validate_confirm_password(confirm_password, password)
        == Err(ValidationError::PasswordsDoNotMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required(""), Err(ValidationError::Required));
        assert!(validate_required("user1").is_ok());
        assert!(validate_required(" ").is_ok());
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("P4ssword", "P4ssword").is_ok());
        assert_eq!(
            validate_confirm_password("", "P4ssword"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("p4ssword", "P4ssword"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(
            validate_confirm_password("P4ssword ", "P4ssword"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_all_filled() {
        assert!(all_filled(&["a", "b"]));
        assert!(!all_filled(&["a", ""]));
        assert!(all_filled(&[]));
    }

    #[test]
    fn test_passwords_match_requires_values() {
        assert!(passwords_match("P4ssword", "P4ssword"));
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("P4ssword", ""));
        assert!(!passwords_match("P4ssword", "P4ss"));
    }

    #[test]
    fn test_shows_mismatch_only_after_confirmation_typed() {
        assert!(!shows_mismatch("P4ssword", ""));
        assert!(shows_mismatch("P4ssword", "P4ss"));
        assert!(shows_mismatch("", "P4ss"));
        assert!(!shows_mismatch("P4ssword", "P4ssword"));
    }
}
