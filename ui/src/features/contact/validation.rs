use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::types::{ContactField, ContactFields, FieldErrors};

/// Minimum trimmed message length used when no config is supplied
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;

/// Per-field validation failures; `Display` is the inline message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
}

// local-part @ domain . tld, no whitespace and a single '@'
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

// 10 digits grouped 3-3-4; optional parentheses on the area code and
// optional '-', '.' or ' ' separators
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("valid hardcoded regex")
});

fn required(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(missing)
    } else {
        Ok(())
    }
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    required(value, ValidationError::FirstNameRequired)
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    required(value, ValidationError::LastNameRequired)
}

/// The pattern is applied to the raw value, so surrounding spaces are rejected.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    required(value, ValidationError::EmailRequired)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    required(value, ValidationError::PhoneRequired)?;
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Length is measured in UTF-16 code units, the same count a browser form reports.
pub fn validate_message(value: &str, min_chars: usize) -> Result<(), ValidationError> {
    required(value, ValidationError::MessageRequired)?;
    if value.trim().encode_utf16().count() < min_chars {
        Err(ValidationError::MessageTooShort { min: min_chars })
    } else {
        Ok(())
    }
}

/// Validate every field and report all failures at once.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    validate_with_min_message(fields, DEFAULT_MIN_MESSAGE_CHARS)
}

pub fn validate_with_min_message(fields: &ContactFields, min_message_chars: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in ContactField::ALL {
        let value = fields.get(field);
        let result = match field {
            ContactField::FirstName => validate_first_name(value),
            ContactField::LastName => validate_last_name(value),
            ContactField::Email => validate_email(value),
            ContactField::Phone => validate_phone(value),
            ContactField::Message => validate_message(value, min_message_chars),
        };

        if let Err(error) = result {
            errors.insert(field, error);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn fields(first: &str, last: &str, email: &str, phone: &str, message: &str) -> ContactFields {
        ContactFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    // --- whole form ---

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ContactFields::default());

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.message(ContactField::FirstName).as_deref(), Some("First name is required"));
        assert_eq!(errors.message(ContactField::LastName).as_deref(), Some("Last name is required"));
        assert_eq!(errors.message(ContactField::Email).as_deref(), Some("Email is required"));
        assert_eq!(errors.message(ContactField::Phone).as_deref(), Some("Phone number is required"));
        assert_eq!(errors.message(ContactField::Message).as_deref(), Some("Message is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&fields("  ", "\t", " ", " ", "   "));
        assert_eq!(errors.get(ContactField::FirstName), Some(&ValidationError::FirstNameRequired));
        assert_eq!(errors.get(ContactField::Email), Some(&ValidationError::EmailRequired));
        assert_eq!(errors.get(ContactField::Message), Some(&ValidationError::MessageRequired));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn malformed_values_report_format_errors() {
        let errors = validate(&fields("A", "B", "bad", "123", "short"));

        assert_eq!(errors.len(), 3);
        assert!(!errors.contains(ContactField::FirstName));
        assert!(!errors.contains(ContactField::LastName));
        assert_eq!(
            errors.message(ContactField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message(ContactField::Phone).as_deref(),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            errors.message(ContactField::Message).as_deref(),
            Some("Message must be at least 10 characters long")
        );
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&fields(
            "Jane",
            "Doe",
            "jane@example.com",
            "647-971-6235",
            "Hello, I would like to connect.",
        ));
        assert!(errors.is_empty());
    }

    #[test]
    fn custom_minimum_message_length() {
        let errors = validate_with_min_message(&fields("A", "B", "a@b.co", "6479716235", "hey there"), 20);
        assert_eq!(
            errors.message(ContactField::Message).as_deref(),
            Some("Message must be at least 20 characters long")
        );
    }

    // --- email ---

    #[test]
    fn email_accepts_plain_address() {
        assert_eq!(validate_email("jane@example.com"), Ok(()));
        assert_eq!(validate_email("jane.doe+hi@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn email_rejects_missing_dot_in_domain() {
        assert_eq!(validate_email("jane@example"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_rejects_two_at_signs() {
        assert_eq!(validate_email("jane@doe@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_rejects_embedded_whitespace() {
        assert_eq!(validate_email("jane doe@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(" jane@example.com"), Err(ValidationError::InvalidEmail));
    }

    // --- phone ---

    #[test]
    fn phone_accepts_grouped_forms() {
        for phone in [
            "(647) 971-6235",
            "647.971.6235",
            "6479716235",
            "647-971-6235",
            "647 971 6235",
            "(647)971-6235",
        ] {
            assert_eq!(validate_phone(phone), Ok(()), "{phone}");
        }
    }

    #[test]
    fn phone_rejects_short_numbers() {
        assert_eq!(validate_phone("12345"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn phone_rejects_extra_digits_and_letters() {
        assert_eq!(validate_phone("647-971-62350"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("647-971-623a"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("+1 647 971 6235"), Err(ValidationError::InvalidPhone));
    }

    // --- message ---

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        assert_eq!(
            validate_message("   123456789   ", 10),
            Err(ValidationError::MessageTooShort { min: 10 })
        );
        assert_eq!(validate_message("1234567890", 10), Ok(()));
        assert_eq!(validate_message("éééééééééé", 10), Ok(()));
    }

    #[test]
    fn message_length_counts_utf16_units() {
        // each emoji is a surrogate pair
        assert_eq!(validate_message("😀😀😀😀😀", 10), Ok(()));
        assert_eq!(
            validate_message("😀😀😀😀", 10),
            Err(ValidationError::MessageTooShort { min: 10 })
        );
        assert_eq!(
            validate_message("ééééééééé", 10),
            Err(ValidationError::MessageTooShort { min: 10 })
        );
    }

    #[quickcheck]
    fn validate_is_idempotent(first: String, last: String, email: String, phone: String, message: String) -> bool {
        let input = fields(&first, &last, &email, &phone, &message);
        validate(&input) == validate(&input)
    }

    #[quickcheck]
    fn only_failing_fields_are_reported(first: String, email: String) -> bool {
        let input = fields(&first, "Doe", &email, "647-971-6235", "Hello, I would like to connect.");
        let errors = validate(&input);
        let only_expected = errors
            .iter()
            .all(|(field, _)| matches!(field, ContactField::FirstName | ContactField::Email));
        only_expected
    }
}
