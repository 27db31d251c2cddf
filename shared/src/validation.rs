//! Field checks for the plain HTML forms on the site pages.
//!
//! Every pass recomputes the whole error set from the current field values;
//! nothing carries over from an earlier pass.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

lazy_static! {
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap();
    static ref PHONE_SEPARATORS: Regex = Regex::new(r"[\s\-()]").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Spaces, hyphens and parentheses are ignored before matching.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = PHONE_SEPARATORS.replace_all(phone, "");
    PHONE_REGEX.is_match(&digits)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Selection,
    Multiline,
}

impl FieldKind {
    /// Maps an `<input type=...>` attribute onto a kind.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Phone,
            _ => FieldKind::Text,
        }
    }
}

/// Snapshot of one control read out of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: value.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn check(&self) -> Option<FieldError> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return self.required.then_some(FieldError::MissingValue);
        }

        match self.kind {
            FieldKind::Email if !is_valid_email(&self.value) => Some(FieldError::InvalidEmail),
            FieldKind::Phone if !is_valid_phone(&self.value) => Some(FieldError::InvalidPhone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    /// Position of the field in the slice that was validated.
    pub index: usize,
    pub name: String,
    pub error: FieldError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    failures: Vec<FieldFailure>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<FieldError> {
        self.failures
            .iter()
            .find(|failure| failure.name == name)
            .map(|failure| failure.error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldFailure> {
        self.failures.iter()
    }
}

/// Validates every field and collects one failure per rejected field.
pub fn validate_fields(fields: &[FormField]) -> FormErrors {
    let failures = fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| {
            field.check().map(|error| FieldFailure {
                index,
                name: field.name.clone(),
                error,
            })
        })
        .collect();

    FormErrors { failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("test@example.com")]
    #[case("user.name@domain.co.uk")]
    #[case("user+tag@example.org")]
    #[case("jane@uni.edu")]
    fn accepts_well_formed_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user name@example.com")]
    #[case("user@@example.com")]
    #[case("")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[rstest]
    #[case("+266 5812 3456")]
    #[case("(555) 123-4567")]
    #[case("5551234567")]
    #[case("+1")]
    fn accepts_phone_numbers(#[case] phone: &str) {
        assert!(is_valid_phone(phone));
    }

    #[rstest]
    #[case("0123456")]
    #[case("phone")]
    #[case("+")]
    #[case("12345678901234567")]
    #[case("555.123.4567")]
    fn rejects_phone_numbers(#[case] phone: &str) {
        assert!(!is_valid_phone(phone));
    }

    #[test]
    fn input_type_maps_to_kind() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("TEL"), FieldKind::Phone);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("number"), FieldKind::Text);
    }

    #[test]
    fn blank_required_fields_are_missing() {
        let fields = vec![
            FormField::new("name", FieldKind::Text, "   ").required(),
            FormField::new("email", FieldKind::Email, "").required(),
            FormField::new("topic", FieldKind::Selection, "").required(),
            FormField::new("message", FieldKind::Multiline, "\n\t").required(),
        ];

        let errors = validate_fields(&fields);

        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().all(|f| f.error == FieldError::MissingValue));
    }

    #[test]
    fn blank_optional_fields_pass() {
        let fields = vec![
            FormField::new("phone", FieldKind::Phone, ""),
            FormField::new("email", FieldKind::Email, "  "),
        ];

        assert!(validate_fields(&fields).is_valid());
    }

    #[test]
    fn reports_each_failure_with_its_position() {
        let fields = vec![
            FormField::new("name", FieldKind::Text, "Jane").required(),
            FormField::new("email", FieldKind::Email, "jane@").required(),
            FormField::new("phone", FieldKind::Phone, "call me"),
        ];

        let errors = validate_fields(&fields);

        let failures: Vec<_> = errors.iter().cloned().collect();
        assert_eq!(
            failures,
            vec![
                FieldFailure { index: 1, name: "email".into(), error: FieldError::InvalidEmail },
                FieldFailure { index: 2, name: "phone".into(), error: FieldError::InvalidPhone },
            ]
        );
        assert_eq!(errors.get("email"), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn each_pass_is_independent() {
        let mut fields = vec![FormField::new("email", FieldKind::Email, "bad").required()];
        assert!(!validate_fields(&fields).is_valid());

        fields[0].value = "good@example.com".into();
        assert!(validate_fields(&fields).is_valid());
    }

    proptest! {
        #[test]
        fn strings_without_an_at_sign_are_invalid_emails(s in "[^@]{0,40}") {
            let field = FormField::new("email", FieldKind::Email, s.clone()).required();
            let errors = validate_fields(&[field]);
            let expected = if s.trim().is_empty() { FieldError::MissingValue } else { FieldError::InvalidEmail };
            prop_assert_eq!(errors.get("email"), Some(expected));
        }

        #[test]
        fn emails_with_whitespace_are_rejected(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{} x@{}.com", local, domain);
            prop_assert!(!is_valid_email(&email));
        }
    }
}
