use std::rc::Rc;

use chrono::Utc;
use log::{debug, info, warn};
use shared::{RegistrationErrors, RegistrationField, RegistrationForm, RegistrationSubmission};
use uuid::Uuid;
use yew::prelude::*;

/// Where the registration modal is in its lifecycle.
///
/// The ticket in `Submitting`/`Submitted` identifies one submission; delayed
/// actions carrying a different ticket are stale and ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting(Uuid),
    Submitted(Uuid),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationState {
    pub phase: ModalPhase,
    pub selected_club: String,
    pub form: RegistrationForm,
    pub errors: RegistrationErrors,
}

impl RegistrationState {
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ModalPhase::Submitting(_))
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, ModalPhase::Submitted(_))
    }

    pub fn error_message(&self, field: RegistrationField) -> Option<String> {
        self.errors.get(&field).map(|error| field.error_message(*error))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationAction {
    Open { club: String },
    Close,
    UpdateField { field: RegistrationField, value: String },
    Submit { ticket: Uuid },
    ProcessingComplete { ticket: Uuid },
    ResetAfterSuccess { ticket: Uuid },
}

impl Reducible for RegistrationState {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RegistrationAction::Open { club } => {
                info!("Opening registration for: {}", club);
                Rc::new(Self {
                    phase: ModalPhase::Open,
                    selected_club: club,
                    errors: RegistrationErrors::new(),
                    ..(*self).clone()
                })
            }
            RegistrationAction::Close => {
                // A finished registration is not kept around for the next club.
                let form = if self.is_submitted() {
                    RegistrationForm::default()
                } else {
                    self.form.clone()
                };
                Rc::new(Self {
                    phase: ModalPhase::Closed,
                    form,
                    errors: RegistrationErrors::new(),
                    ..(*self).clone()
                })
            }
            RegistrationAction::UpdateField { field, value } => {
                if !self.is_open() {
                    return self;
                }
                let mut next = (*self).clone();
                next.form.set(field, value);
                next.errors.remove(&field);
                Rc::new(next)
            }
            RegistrationAction::Submit { ticket } => {
                if self.phase != ModalPhase::Open {
                    debug!("Ignoring submit while {:?}", self.phase);
                    return self;
                }
                match self.form.check() {
                    Ok(()) => Rc::new(Self {
                        phase: ModalPhase::Submitting(ticket),
                        errors: RegistrationErrors::new(),
                        ..(*self).clone()
                    }),
                    Err(errors) => {
                        debug!("Registration rejected: {:?}", errors);
                        Rc::new(Self {
                            errors,
                            ..(*self).clone()
                        })
                    }
                }
            }
            RegistrationAction::ProcessingComplete { ticket } => {
                if self.phase != ModalPhase::Submitting(ticket) {
                    return self;
                }
                let submission =
                    RegistrationSubmission::new(self.selected_club.clone(), self.form.clone(), Utc::now());
                match serde_json::to_string(&submission) {
                    Ok(payload) => info!("Form submitted successfully: {}", payload),
                    Err(e) => warn!("Form submitted, payload not serializable: {}", e),
                }
                Rc::new(Self {
                    phase: ModalPhase::Submitted(ticket),
                    ..(*self).clone()
                })
            }
            RegistrationAction::ResetAfterSuccess { ticket } => {
                if self.phase != ModalPhase::Submitted(ticket) {
                    return self;
                }
                Rc::new(Self {
                    phase: ModalPhase::Closed,
                    selected_club: self.selected_club.clone(),
                    form: RegistrationForm::default(),
                    errors: RegistrationErrors::new(),
                })
            }
        }
    }
}
