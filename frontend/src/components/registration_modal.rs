use gloo_timers::callback::Timeout;
use log::debug;
use shared::{RegistrationField, StudyYear, Timings};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::events::ClickDispatcher;
use crate::registration::{ModalPhase, RegistrationAction, RegistrationState};

pub const JOIN_BUTTON: &str = ".join-club-btn";
const CLUB_CARD: &str = ".club-detailed-card";

/// Heading text of the club card that contains `button`.
pub fn club_name_for(button: &Element) -> Option<String> {
    let card = button.closest(CLUB_CARD).ok().flatten()?;
    let heading = card.query_selector("h3").ok().flatten()?;
    let name = heading.text_content()?.trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn field_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[derive(Properties, Clone, PartialEq)]
pub struct RegistrationModalProps {
    pub clicks: ClickDispatcher,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(RegistrationModal)]
pub fn registration_modal(props: &RegistrationModalProps) -> Html {
    let state = use_reducer_eq(RegistrationState::default);

    // Join buttons live outside this component, anywhere on the page.
    {
        let state = state.clone();
        use_effect_with(props.clicks.clone(), move |clicks| {
            let subscription = clicks.subscribe(JOIN_BUTTON, move |button, _| {
                match club_name_for(button) {
                    Some(club) => state.dispatch(RegistrationAction::Open { club }),
                    None => debug!("Join button outside a club card"),
                }
            });
            move || drop(subscription)
        });
    }

    // Delayed phase changes; leaving the phase drops (and so cancels) the timer.
    {
        let state = state.clone();
        let timings = props.timings;
        use_effect_with(state.phase, move |phase| {
            let pending = match *phase {
                ModalPhase::Submitting(ticket) => {
                    let state = state.clone();
                    Some(Timeout::new(timings.submit_processing_ms, move || {
                        state.dispatch(RegistrationAction::ProcessingComplete { ticket });
                    }))
                }
                ModalPhase::Submitted(ticket) => {
                    let state = state.clone();
                    Some(Timeout::new(timings.success_reset_ms, move || {
                        state.dispatch(RegistrationAction::ResetAfterSuccess { ticket });
                    }))
                }
                ModalPhase::Closed | ModalPhase::Open => None,
            };
            move || drop(pending)
        });
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(RegistrationAction::Close);
        })
    };

    let on_input = {
        let state = state.clone();
        move |field: RegistrationField| {
            let state = state.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = field_value(&e) {
                    state.dispatch(RegistrationAction::UpdateField { field, value });
                }
            })
        }
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(RegistrationAction::Submit {
                ticket: Uuid::new_v4(),
            });
        })
    };

    if !state.is_open() {
        return html! {};
    }

    if state.is_submitted() {
        return html! {
            <div class="modal-backdrop" onclick={on_close}>
                <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                    <div class="registration-success">
                        <i class="fas fa-check-circle"></i>
                        <h2>{"Registration Successful!"}</h2>
                        <p>{format!("Thank you {}!", state.form.student_name)}</p>
                        <p>{format!("You have successfully registered for the {}.", state.selected_club)}</p>
                        <p class="registration-followup">
                            {format!("We will contact you at {} with more details.", state.form.student_email)}
                        </p>
                    </div>
                </div>
            </div>
        };
    }

    let error_class = |field: RegistrationField| {
        if state.errors.contains_key(&field) { "error" } else { "" }
    };
    let error_text = |field: RegistrationField| -> Html {
        match state.error_message(field) {
            Some(message) => html! { <span class="error-message">{message}</span> },
            None => html! {},
        }
    };
    let text_input = |field: RegistrationField, input_type: &'static str, placeholder: &'static str, required: bool| {
        html! {
            <input
                type={input_type}
                id={field.name()}
                name={field.name()}
                value={state.form.get(field).to_string()}
                oninput={on_input(field)}
                class={error_class(field)}
                placeholder={placeholder}
                required={required}
            />
        }
    };

    let submitting = state.is_submitting();

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <button class="modal-close" type="button" onclick={on_close}>
                    <i class="fas fa-times"></i>
                </button>

                <div class="form-header">
                    <h2>{"Club Registration"}</h2>
                    <p>{format!("Join the {}", state.selected_club)}</p>
                </div>

                <form {onsubmit} class="registration-form" novalidate={true}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="studentName">{"Full Name *"}</label>
                            {text_input(RegistrationField::StudentName, "text", "Enter your full name", true)}
                            {error_text(RegistrationField::StudentName)}
                        </div>
                        <div class="form-group">
                            <label for="studentId">{"Student ID *"}</label>
                            {text_input(RegistrationField::StudentId, "text", "Enter your student ID", true)}
                            {error_text(RegistrationField::StudentId)}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="studentEmail">{"Email Address *"}</label>
                            {text_input(RegistrationField::StudentEmail, "email", "your.email@university.edu", true)}
                            {error_text(RegistrationField::StudentEmail)}
                        </div>
                        <div class="form-group">
                            <label for="studentPhone">{"Phone Number"}</label>
                            {text_input(RegistrationField::StudentPhone, "tel", "(+266) ", false)}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="studentYear">{"Year of Study *"}</label>
                            <select
                                id="studentYear"
                                name="studentYear"
                                oninput={on_input(RegistrationField::StudentYear)}
                                class={error_class(RegistrationField::StudentYear)}
                                required={true}
                            >
                                <option value="" selected={state.form.student_year.is_empty()}>{"Select your year"}</option>
                                {for StudyYear::ALL.iter().map(|year| html! {
                                    <option
                                        value={year.value()}
                                        selected={state.form.student_year == year.value()}
                                    >
                                        {year.label()}
                                    </option>
                                })}
                            </select>
                            {error_text(RegistrationField::StudentYear)}
                        </div>
                        <div class="form-group">
                            <label for="studentMajor">{"Major/Program"}</label>
                            {text_input(RegistrationField::StudentMajor, "text", "Your field of study", false)}
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="selectedClub">{"Selected Club"}</label>
                        <input
                            type="text"
                            id="selectedClub"
                            value={state.selected_club.clone()}
                            readonly={true}
                            class="readonly-field"
                        />
                    </div>

                    <div class="form-group">
                        <label for="interests">{"Why are you interested in this club?"}</label>
                        <textarea
                            id="interests"
                            name="interests"
                            rows="3"
                            value={state.form.interests.clone()}
                            oninput={on_input(RegistrationField::Interests)}
                            placeholder="Tell us what excites you about this club and what you hope to gain from joining..."
                        />
                    </div>

                    <div class="form-group">
                        <label for="previousExperience">{"Previous Experience (Optional)"}</label>
                        <textarea
                            id="previousExperience"
                            name="previousExperience"
                            rows="2"
                            value={state.form.previous_experience.clone()}
                            oninput={on_input(RegistrationField::PreviousExperience)}
                            placeholder="Any relevant experience or skills you have..."
                        />
                    </div>

                    <button
                        type="submit"
                        class={classes!("btn", "btn-primary", "submit-btn", submitting.then_some("submitting"))}
                        disabled={submitting}
                    >
                        if submitting {
                            <><i class="fas fa-spinner fa-spin"></i>{" Processing..."}</>
                        } else {
                            <><i class="fas fa-user-plus"></i>{" Register for Club"}</>
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
