pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod registration;
pub mod slideshow;
pub mod validation;

// Re-export commonly used items
pub use error::{FieldError, Result, SharedError};
pub use config::{SiteConfig, Timings};
pub use forms::{PageForm, PAGE_FORMS};
pub use navigation::{current_page, is_active_link, MenuState, HOME_PAGE};
pub use registration::{
    RegistrationErrors, RegistrationField, RegistrationForm, RegistrationSubmission, StudyYear,
};
pub use slideshow::{SlideCursor, Slideshow, SlideshowEvent, Step, TimerCommand};
pub use validation::{validate_fields, FieldKind, FieldFailure, FormErrors, FormField};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn generic_and_modal_checks_agree_on_email_format() {
        for email in ["jane@uni.edu", "not-an-email", "a@b", "x y@z.io"] {
            let page = FormField::new("email", FieldKind::Email, email).required().check();
            let modal = RegistrationForm {
                student_name: "Jane Doe".into(),
                student_id: "S123".into(),
                student_email: email.into(),
                student_year: StudyYear::Senior.value().into(),
                ..Default::default()
            }
            .check()
            .err()
            .and_then(|errors| errors.get(&RegistrationField::StudentEmail).copied());

            assert_eq!(page, modal, "email {:?}", email);
        }
    }
}
