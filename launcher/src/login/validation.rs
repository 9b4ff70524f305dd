//! Field validation for the login form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang;

/// Legacy short username: 1-16 word characters.
static VALID_USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{1,16}$").expect("username regex is valid"));

/// Basic email shape: local-part@domain with no embedded whitespace and at
/// least one dot in the domain.
static BASIC_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"));

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    Required,
    /// The value does not have an acceptable shape.
    InvalidValue,
    /// The account store failed while persisting; carries the raw error
    /// text from the store.
    Store(String),
}

impl FieldError {
    /// User-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            FieldError::Required => lang::text("login.error.requiredValue"),
            FieldError::InvalidValue => lang::text("login.error.invalidValue"),
            FieldError::Store(msg) => msg.clone(),
        }
    }
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(FieldError),
}

/// Validate the username field.
///
/// Accepts either an email address or a legacy short username. Both shapes
/// are kept; whether the account service still accepts short usernames is
/// unverified against the live contract.
pub fn validate_username(value: &str) -> FieldStatus {
    if value.is_empty() {
        return FieldStatus::Invalid(FieldError::Required);
    }
    if BASIC_EMAIL.is_match(value) || VALID_USERNAME.is_match(value) {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid(FieldError::InvalidValue)
    }
}

/// Validate the password field: anything non-empty passes.
pub fn validate_password(value: &str) -> FieldStatus {
    if value.is_empty() {
        FieldStatus::Invalid(FieldError::InvalidValue)
    } else {
        FieldStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_usernames_accepted() {
        for name in ["Steve", "a", "abc_def_123", "0123456789abcdef"] {
            assert_eq!(validate_username(name), FieldStatus::Valid, "{name}");
        }
    }

    #[test]
    fn emails_accepted() {
        for email in ["user@example.com", "a.b@sub.domain.org", "x@y.z"] {
            assert_eq!(validate_username(email), FieldStatus::Valid, "{email}");
        }
    }

    #[test]
    fn invalid_usernames_rejected() {
        for value in [
            "this_is_17_chars_",    // too long for a username, not an email
            "has space",            // whitespace
            "semi;colon",           // illegal char
            "user@nodot",           // email without a dot in the domain
            "user @example.com",    // embedded whitespace
            "p\u{00e9}dro",         // non-ASCII
        ] {
            assert_eq!(
                validate_username(value),
                FieldStatus::Invalid(FieldError::InvalidValue),
                "{value}"
            );
        }
    }

    #[test]
    fn empty_username_reports_required() {
        assert_eq!(
            validate_username(""),
            FieldStatus::Invalid(FieldError::Required)
        );
    }

    #[test]
    fn password_only_requires_non_empty() {
        assert_eq!(
            validate_password(""),
            FieldStatus::Invalid(FieldError::InvalidValue)
        );
        assert_eq!(validate_password("x"), FieldStatus::Valid);
    }

    #[test]
    fn store_error_message_is_raw() {
        let err = FieldError::Store("disk full".to_string());
        assert_eq!(err.message(), "disk full");
    }
}
