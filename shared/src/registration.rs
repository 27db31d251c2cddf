use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::FieldError;
use crate::validation::is_valid_email;

/// Inputs of the club registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    StudentName,
    StudentId,
    StudentEmail,
    StudentPhone,
    StudentYear,
    StudentMajor,
    PreviousExperience,
    Interests,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 8] = [
        RegistrationField::StudentName,
        RegistrationField::StudentId,
        RegistrationField::StudentEmail,
        RegistrationField::StudentPhone,
        RegistrationField::StudentYear,
        RegistrationField::StudentMajor,
        RegistrationField::PreviousExperience,
        RegistrationField::Interests,
    ];

    /// The `name`/`id` attribute used in the markup.
    pub fn name(&self) -> &'static str {
        match self {
            RegistrationField::StudentName => "studentName",
            RegistrationField::StudentId => "studentId",
            RegistrationField::StudentEmail => "studentEmail",
            RegistrationField::StudentPhone => "studentPhone",
            RegistrationField::StudentYear => "studentYear",
            RegistrationField::StudentMajor => "studentMajor",
            RegistrationField::PreviousExperience => "previousExperience",
            RegistrationField::Interests => "interests",
        }
    }

    fn struct_field(&self) -> &'static str {
        match self {
            RegistrationField::StudentName => "student_name",
            RegistrationField::StudentId => "student_id",
            RegistrationField::StudentEmail => "student_email",
            RegistrationField::StudentPhone => "student_phone",
            RegistrationField::StudentYear => "student_year",
            RegistrationField::StudentMajor => "student_major",
            RegistrationField::PreviousExperience => "previous_experience",
            RegistrationField::Interests => "interests",
        }
    }

    fn from_struct_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.struct_field() == field)
    }

    /// Message shown under the input for a given failure.
    pub fn error_message(&self, error: FieldError) -> String {
        match (self, error) {
            (RegistrationField::StudentName, FieldError::MissingValue) => "Full name is required".to_string(),
            (RegistrationField::StudentId, FieldError::MissingValue) => "Student ID is required".to_string(),
            (RegistrationField::StudentEmail, FieldError::MissingValue) => "Email is required".to_string(),
            (RegistrationField::StudentYear, FieldError::MissingValue) => {
                FieldError::InvalidYearSelection.to_string()
            }
            (_, error) => error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl StudyYear {
    pub const ALL: [StudyYear; 5] = [
        StudyYear::Freshman,
        StudyYear::Sophomore,
        StudyYear::Junior,
        StudyYear::Senior,
        StudyYear::Graduate,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            StudyYear::Freshman => "freshman",
            StudyYear::Sophomore => "sophomore",
            StudyYear::Junior => "junior",
            StudyYear::Senior => "senior",
            StudyYear::Graduate => "graduate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyYear::Freshman => "Freshman",
            StudyYear::Sophomore => "Sophomore",
            StudyYear::Junior => "Junior",
            StudyYear::Senior => "Senior",
            StudyYear::Graduate => "Graduate",
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(FieldError::MissingValue.code()));
    }
    Ok(())
}

fn student_email(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::new(FieldError::InvalidEmail.code()));
    }
    Ok(())
}

fn year_selected(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(FieldError::InvalidYearSelection.code()));
    }
    Ok(())
}

/// Values typed into the registration modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[validate(custom = "not_blank")]
    pub student_name: String,
    #[validate(custom = "not_blank")]
    pub student_id: String,
    #[validate(custom = "student_email")]
    pub student_email: String,
    pub student_phone: String,
    #[validate(custom = "year_selected")]
    pub student_year: String,
    pub student_major: String,
    pub previous_experience: String,
    pub interests: String,
}

pub type RegistrationErrors = BTreeMap<RegistrationField, FieldError>;

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::StudentName => &self.student_name,
            RegistrationField::StudentId => &self.student_id,
            RegistrationField::StudentEmail => &self.student_email,
            RegistrationField::StudentPhone => &self.student_phone,
            RegistrationField::StudentYear => &self.student_year,
            RegistrationField::StudentMajor => &self.student_major,
            RegistrationField::PreviousExperience => &self.previous_experience,
            RegistrationField::Interests => &self.interests,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::StudentName => &mut self.student_name,
            RegistrationField::StudentId => &mut self.student_id,
            RegistrationField::StudentEmail => &mut self.student_email,
            RegistrationField::StudentPhone => &mut self.student_phone,
            RegistrationField::StudentYear => &mut self.student_year,
            RegistrationField::StudentMajor => &mut self.student_major,
            RegistrationField::PreviousExperience => &mut self.previous_experience,
            RegistrationField::Interests => &mut self.interests,
        };
        *slot = value;
    }

    /// Runs the modal's checks and returns one error per rejected field.
    pub fn check(&self) -> Result<(), RegistrationErrors> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let mut rejected = RegistrationErrors::new();
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = RegistrationField::from_struct_field(name) else {
                log::warn!("Validation reported unknown field {}", name);
                continue;
            };
            if let Some(error) = field_errors
                .iter()
                .find_map(|e| FieldError::from_code(&e.code))
            {
                rejected.insert(field, error);
            }
        }
        Err(rejected)
    }
}

/// A completed registration as it is reported once processing finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub club: String,
    #[serde(flatten)]
    pub form: RegistrationForm,
    pub submitted_at: DateTime<Utc>,
}

impl RegistrationSubmission {
    pub fn new(club: impl Into<String>, form: RegistrationForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            club: club.into(),
            form,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn jane() -> RegistrationForm {
        RegistrationForm {
            student_name: "Jane Doe".into(),
            student_id: "S123".into(),
            student_email: "jane@uni.edu".into(),
            student_year: StudyYear::Junior.value().into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(jane().check(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = RegistrationForm::default().check().unwrap_err();

        let expected: RegistrationErrors = [
            (RegistrationField::StudentName, FieldError::MissingValue),
            (RegistrationField::StudentId, FieldError::MissingValue),
            (RegistrationField::StudentEmail, FieldError::MissingValue),
            (RegistrationField::StudentYear, FieldError::InvalidYearSelection),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn malformed_email_is_invalid_email() {
        let form = RegistrationForm {
            student_email: "not-an-email".into(),
            ..jane()
        };

        let errors = form.check().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&RegistrationField::StudentEmail), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let form = RegistrationForm {
            student_name: "   ".into(),
            ..jane()
        };

        let errors = form.check().unwrap_err();
        assert_eq!(errors.get(&RegistrationField::StudentName), Some(&FieldError::MissingValue));
    }

    #[test]
    fn optional_fields_are_not_checked() {
        let form = RegistrationForm {
            student_phone: "not a phone".into(),
            ..jane()
        };
        assert!(form.check().is_ok());
    }

    #[rstest]
    #[case(RegistrationField::StudentName, FieldError::MissingValue, "Full name is required")]
    #[case(RegistrationField::StudentId, FieldError::MissingValue, "Student ID is required")]
    #[case(RegistrationField::StudentEmail, FieldError::MissingValue, "Email is required")]
    #[case(RegistrationField::StudentEmail, FieldError::InvalidEmail, "Please enter a valid email address")]
    #[case(RegistrationField::StudentYear, FieldError::InvalidYearSelection, "Please select your year of study")]
    fn messages_name_the_field(
        #[case] field: RegistrationField,
        #[case] error: FieldError,
        #[case] message: &str,
    ) {
        assert_eq!(field.error_message(error), message);
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut form = RegistrationForm::default();
        for (i, field) in RegistrationField::ALL.into_iter().enumerate() {
            form.set(field, format!("value {}", i));
        }
        for (i, field) in RegistrationField::ALL.into_iter().enumerate() {
            assert_eq!(form.get(field), format!("value {}", i));
        }
    }

    #[test]
    fn submission_serializes_flat_with_markup_names() {
        let at = Utc.with_ymd_and_hms(2024, 9, 2, 10, 30, 0).unwrap();
        let submission = RegistrationSubmission::new("Debate Society", jane(), at);

        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["club"], "Debate Society");
        assert_eq!(json["studentName"], "Jane Doe");
        assert_eq!(json["studentYear"], "junior");
        assert_eq!(json["submittedAt"], "2024-09-02T10:30:00Z");
    }
}
