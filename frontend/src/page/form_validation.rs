use gloo::events::{EventListener, EventListenerOptions};
use gloo_utils::document;
use log::{debug, info, warn};
use shared::{validate_fields, FieldKind, FormErrors, FormField, PageForm, PAGE_FORMS};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{clear_style, query_all_in, set_style};
use crate::page::notifier::SuccessNotifier;

const ERROR_STYLE: &str =
    "color: var(--secondary); font-size: 0.875rem; margin-top: 0.25rem; display: block;";
const ERROR_BORDER: &str = "var(--secondary)";
const SKIPPED_INPUT_TYPES: [&str; 5] = ["submit", "button", "reset", "hidden", "image"];

/// Reads one control into a [`FormField`]; buttons and hidden inputs yield `None`.
fn read_control(element: &Element, position: usize) -> Option<FormField> {
    let fallback = || {
        let id = element.id();
        if id.is_empty() { format!("field-{}", position) } else { id }
    };
    let named = |name: String| if name.is_empty() { fallback() } else { name };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let input_type = input.type_();
        if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
            return None;
        }
        let value = match input_type.as_str() {
            "checkbox" | "radio" if !input.checked() => String::new(),
            _ => input.value(),
        };
        return Some(FormField {
            name: named(input.name()),
            kind: FieldKind::from_input_type(&input_type),
            required: input.required(),
            value,
        });
    }

    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(FormField {
            name: named(select.name()),
            kind: FieldKind::Selection,
            required: select.required(),
            value: select.value(),
        });
    }

    element.dyn_ref::<HtmlTextAreaElement>().map(|area| FormField {
        name: named(area.name()),
        kind: FieldKind::Multiline,
        required: area.required(),
        value: area.value(),
    })
}

fn read_form(form: &Element) -> (Vec<Element>, Vec<FormField>) {
    query_all_in(form, "input, textarea, select")
        .into_iter()
        .enumerate()
        .filter_map(|(position, element)| {
            read_control(&element, position).map(|field| (element, field))
        })
        .unzip()
}

fn clear_form_errors(form: &Element) {
    for message in query_all_in(form, ".error-message") {
        message.remove();
    }
    for control in query_all_in(form, "input, textarea, select") {
        clear_style(&control, "border-color");
    }
}

fn show_field_error(control: &Element, message: &str) -> anyhow::Result<()> {
    set_style(control, "border-color", ERROR_BORDER);

    let Some(parent) = control.parent_node() else {
        return Ok(());
    };
    let span = document().create_element("span").map_err(crate::dom::js_error)?;
    span.set_class_name("error-message");
    span.set_text_content(Some(message));
    span.set_attribute("style", ERROR_STYLE).map_err(crate::dom::js_error)?;
    parent.append_child(&span).map_err(crate::dom::js_error)?;
    Ok(())
}

/// Clears old annotations, validates every control and annotates failures.
pub fn validate_form(form: &Element) -> FormErrors {
    clear_form_errors(form);

    let (controls, fields) = read_form(form);
    let errors = validate_fields(&fields);
    for failure in errors.iter() {
        if let Some(control) = controls.get(failure.index) {
            if let Err(e) = show_field_error(control, &failure.error.to_string()) {
                warn!("Could not annotate field {}: {}", failure.name, e);
            }
        }
    }
    errors
}

fn bind(page_form: &'static PageForm, form: HtmlFormElement, notifier: SuccessNotifier) {
    let options = EventListenerOptions::enable_prevent_default();
    let target = form.clone();
    EventListener::new_with_options(&target, "submit", options, move |event| {
        event.prevent_default();
        info!("{} form submitted", page_form.label);

        let errors = validate_form(&form);
        if !errors.is_valid() {
            debug!("{} form rejected with {} error(s)", page_form.label, errors.len());
            return;
        }
        if let Err(e) = notifier.show(page_form.success_message) {
            warn!("Could not show success banner: {}", e);
        }
        form.reset();
    })
    .forget();
}

/// Attaches validation to whichever of the known page forms are present.
pub fn init_form_validation(notifier: &SuccessNotifier) -> usize {
    info!("Initializing form validation...");
    let mut bound = 0;
    for page_form in PAGE_FORMS.iter() {
        let Some(form) = document()
            .get_element_by_id(page_form.id)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        else {
            continue;
        };
        bind(page_form, form, notifier.clone());
        bound += 1;
    }
    bound
}
