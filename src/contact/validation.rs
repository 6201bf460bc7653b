use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::fields::{FieldKey, FormFields};

/// Minimum trimmed message length, in UTF-16 code units as a browser counts them.
pub const MIN_MESSAGE_CHARS: usize = 10;

// Structural check only: something@something.something, unanchored.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Per-field validation failures. A key is absent when its field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldKey, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<ValidationError> {
        self.0.get(&key).copied()
    }

    /// The message a view renders under the field, if any.
    pub fn message(&self, key: FieldKey) -> Option<String> {
        self.get(key).map(|e| e.to_string())
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Returns true if an error was recorded for `key`.
    pub fn clear(&mut self, key: FieldKey) -> bool {
        self.0.remove(&key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, ValidationError)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn insert(&mut self, key: FieldKey, err: ValidationError) {
        self.0.insert(key, err);
    }
}

/// Checks every field independently and collects all failures.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if fields.name.trim().is_empty() {
        errors.insert(FieldKey::Name, ValidationError::NameRequired);
    }

    if fields.email.trim().is_empty() {
        errors.insert(FieldKey::Email, ValidationError::EmailRequired);
    } else if !EMAIL_SHAPE.is_match(&fields.email) {
        errors.insert(FieldKey::Email, ValidationError::EmailInvalid);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(FieldKey::Message, ValidationError::MessageRequired);
    } else if message.encode_utf16().count() < MIN_MESSAGE_CHARS {
        errors.insert(FieldKey::Message, ValidationError::MessageTooShort);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&fields("Jo", "jo@example.com", "", "hello there"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate(&fields("", "a@b.com", "", "hello there"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(FieldKey::Name).as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_bad_email_and_short_message() {
        let errors = validate(&fields("Jo", "bad-email", "", "short"));
        assert_eq!(errors.len(), 2);
        assert!(!errors.contains(FieldKey::Name));
        assert_eq!(
            errors.message(FieldKey::Email).as_deref(),
            Some("Email is invalid")
        );
        assert_eq!(
            errors.message(FieldKey::Message).as_deref(),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_name_rule_uses_trimmed_value() {
        for name in ["", " ", "\t\n  "] {
            let errors = validate(&fields(name, "a@b.com", "", "hello there"));
            assert_eq!(errors.get(FieldKey::Name), Some(ValidationError::NameRequired));
        }
        for name in ["a", "  Jo  "] {
            let errors = validate(&fields(name, "a@b.com", "", "hello there"));
            assert!(!errors.contains(FieldKey::Name));
        }
    }

    #[test]
    fn test_email_shape() {
        let invalid = ["bad-email", "a@b", "@b.com", "a@.com", "a @b.c", "a@b.", "a@ b.com"];
        for email in invalid {
            let errors = validate(&fields("Jo", email, "", "hello there"));
            assert_eq!(
                errors.get(FieldKey::Email),
                Some(ValidationError::EmailInvalid),
                "{email} should be invalid"
            );
        }

        let valid = ["a@b.com", "first.last@sub.example.org", " a@b.co ", "x+y@z.io"];
        for email in valid {
            let errors = validate(&fields("Jo", email, "", "hello there"));
            assert!(!errors.contains(FieldKey::Email), "{email} should be valid");
        }

        let errors = validate(&fields("Jo", "   ", "", "hello there"));
        assert_eq!(errors.get(FieldKey::Email), Some(ValidationError::EmailRequired));
    }

    #[test]
    fn test_message_length_boundaries() {
        let errors = validate(&fields("Jo", "a@b.com", "", "   "));
        assert_eq!(
            errors.get(FieldKey::Message),
            Some(ValidationError::MessageRequired)
        );

        for message in ["a", "123456789", "  123456789  "] {
            let errors = validate(&fields("Jo", "a@b.com", "", message));
            assert_eq!(
                errors.get(FieldKey::Message),
                Some(ValidationError::MessageTooShort)
            );
        }

        for message in ["1234567890", "  1234567890  ", "héllo wörld"] {
            let errors = validate(&fields("Jo", "a@b.com", "", message));
            assert!(!errors.contains(FieldKey::Message));
        }
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        // each emoji is a surrogate pair, so five of them reach the minimum
        let errors = validate(&fields("Jo", "a@b.com", "", "😀😀😀😀😀"));
        assert!(!errors.contains(FieldKey::Message));

        let errors = validate(&fields("Jo", "a@b.com", "", "😀😀😀😀"));
        assert_eq!(
            errors.get(FieldKey::Message),
            Some(ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn test_subject_never_errors() {
        let errors = validate(&fields("", "", "", ""));
        assert_eq!(errors.len(), 3);
        assert!(!errors.contains(FieldKey::Subject));
    }

    #[test]
    fn test_clear_reports_removal() {
        let mut errors = validate(&fields("", "a@b.com", "", "hello there"));
        assert!(errors.clear(FieldKey::Name));
        assert!(!errors.clear(FieldKey::Name));
        assert!(errors.is_empty());
    }
}
