// src/domain/validation.rs
//
// Identity form validation. Failures are surfaced per field, synchronously,
// before anything reaches the network or storage.

use regex::Regex;
use std::sync::OnceLock;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn check_username(value: &str, field: &'static str, errors: &mut Vec<FieldError>) {
    if value.trim().len() < MIN_USERNAME_LEN {
        errors.push(FieldError::new(
            field,
            format!("must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
}

fn check_password(value: &str, errors: &mut Vec<FieldError>) {
    if value.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
}

pub fn validate_login(form: &LoginForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_username(&form.username_or_email, "username", &mut errors);
    check_password(&form.password, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_signup(form: &SignupForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_username(&form.username, "username", &mut errors);
    if !email_regex().is_match(form.email.trim()) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }
    check_password(&form.password, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_passes() {
        let form = LoginForm {
            username_or_email: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn test_short_username_and_password_both_reported() {
        let form = LoginForm {
            username_or_email: "al".to_string(),
            password: "x".to_string(),
        };
        let errors = validate_login(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        let form = SignupForm {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_signup_accepts_plain_address() {
        let form = SignupForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(validate_signup(&form).is_ok());
    }
}
