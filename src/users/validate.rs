use lazy_static::lazy_static;
use regex::Regex;

use crate::users::dto::RegisterRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Check a registration payload against every field rule.
///
/// Returns one message per violated rule; an empty vec means the payload is
/// acceptable. The format rule only fires for a non-blank email, so a missing
/// email reads as missing rather than malformed.
pub fn registration_errors(payload: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if payload.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(&payload.email) {
        errors.push("Invalid email format".to_string());
    }
    if payload.password.trim().is_empty() {
        errors.push("Password is required".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn a_complete_payload_passes() {
        assert!(registration_errors(&payload("buzz", "buzz@gmail.com", "123456")).is_empty());
    }

    #[test]
    fn each_blank_field_gets_its_own_message() {
        let errors = registration_errors(&payload("", "", ""));
        assert_eq!(
            errors,
            vec!["Name is required", "Email is required", "Password is required"]
        );
    }

    #[test]
    fn a_blank_email_is_missing_not_malformed() {
        let errors = registration_errors(&payload("buzz", "", "123456"));
        assert_eq!(errors, vec!["Email is required"]);
    }

    #[test]
    fn a_present_but_malformed_email_is_flagged() {
        let errors = registration_errors(&payload("buzz", "buzz.com", "123456"));
        assert_eq!(errors, vec!["Invalid email format"]);
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let errors = registration_errors(&payload("   ", "buzz@gmail.com", "  "));
        assert_eq!(errors, vec!["Name is required", "Password is required"]);
    }

    #[test]
    fn email_formats() {
        assert!(is_valid_email("buzz@gmail.com"));
        assert!(is_valid_email("first.last@sub.domain.dev"));
        assert!(!is_valid_email("buzz.com"));
        assert!(!is_valid_email("buzz@gmail"));
        assert!(!is_valid_email("bu zz@gmail.com"));
        assert!(!is_valid_email("@gmail.com"));
    }
}
