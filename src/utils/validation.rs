use std::borrow::Cow;

use validator::ValidationError;

/// Short list in the spirit of the stock common-password validators.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwertyuiop",
    "qwerty123",
    "iloveyou",
    "letmein1",
];

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(error(
            "password_too_short",
            "This password is too short. It must contain at least 8 characters",
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(error(
            "password_entirely_numeric",
            "This password is entirely numeric",
        ));
    }
    if COMMON_PASSWORDS
        .iter()
        .any(|common| password.eq_ignore_ascii_case(common))
    {
        return Err(error("password_too_common", "This password is too common"));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_reasonable_password() {
        assert!(validate_password("correct-horse").is_ok());
    }

    #[test]
    fn rejects_short_passwords() {
        let err = validate_password("abc123").unwrap_err();
        assert_eq!(err.code, "password_too_short");
    }

    #[test]
    fn rejects_entirely_numeric_passwords() {
        let err = validate_password("1234567890").unwrap_err();
        assert_eq!(err.code, "password_entirely_numeric");
    }

    #[test]
    fn rejects_common_passwords_case_insensitively() {
        let err = validate_password("QwertyUiop").unwrap_err();
        assert_eq!(err.code, "password_too_common");
    }
}
