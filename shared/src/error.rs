use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

/// Why a single form field was rejected.
///
/// The display text is the generic message shown next to page form fields;
/// the registration modal uses its own per-field wording.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    #[error("This field is required")]
    MissingValue,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Please select your year of study")]
    InvalidYearSelection,
}

impl FieldError {
    /// Stable code used when the error travels through `validator`.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::MissingValue => "required",
            FieldError::InvalidEmail => "email",
            FieldError::InvalidPhone => "phone",
            FieldError::InvalidYearSelection => "year",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(FieldError::MissingValue),
            "email" => Some(FieldError::InvalidEmail),
            "phone" => Some(FieldError::InvalidPhone),
            "year" => Some(FieldError::InvalidYearSelection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldError::MissingValue)]
    #[case(FieldError::InvalidEmail)]
    #[case(FieldError::InvalidPhone)]
    #[case(FieldError::InvalidYearSelection)]
    fn code_resolves_back_to_the_same_error(#[case] error: FieldError) {
        assert_eq!(FieldError::from_code(error.code()), Some(error));
    }

    #[test]
    fn unknown_code_is_not_a_field_error() {
        assert_eq!(FieldError::from_code("length"), None);
    }

    #[test]
    fn json_errors_become_conversion_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        assert!(matches!(SharedError::from(err), SharedError::Conversion(_)));
    }
}
