use gloo::events::EventListener;
use gloo_utils::{document, window};
use log::{debug, info, warn};
use shared::{SiteConfig, Timings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::registration_modal::RegistrationModal;
use crate::config::Config;
use crate::events::ClickDispatcher;

pub mod components;
pub mod config;
pub mod dom;
pub mod events;
pub mod page;
pub mod registration;

/// Element the registration modal renders into.
pub const MODAL_ROOT_ID: &str = "react-modal-root";
const LEGACY_MODAL_ID: &str = "registrationModal";

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub clicks: ClickDispatcher,
    pub timings: Timings,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    debug!("App component rendering");
    html! {
        <RegistrationModal clicks={props.clicks.clone()} timings={props.timings} />
    }
}

fn mount_registration_modal(clicks: ClickDispatcher, timings: Timings) {
    let Some(root) = document().get_element_by_id(MODAL_ROOT_ID) else {
        info!("No #{} on this page, registration modal disabled", MODAL_ROOT_ID);
        return;
    };
    info!("Mounting registration modal to #{}", MODAL_ROOT_ID);
    yew::Renderer::<App>::with_root_and_props(root, AppProps { clicks, timings }).render();
}

/// Exposes `window.closeModal()` for inline handlers on older pages.
fn install_close_modal_hook() -> Result<(), JsValue> {
    let close = Closure::<dyn Fn()>::new(|| {
        if let Some(modal) = document().get_element_by_id(LEGACY_MODAL_ID) {
            dom::set_style(&modal, "display", "none");
        }
    });
    js_sys::Reflect::set(&window(), &JsValue::from_str("closeModal"), close.as_ref())?;
    close.forget();
    Ok(())
}

fn initialize(config: SiteConfig) {
    let clicks = ClickDispatcher::attach(&document());
    page::init_all(&config, &clicks);
    mount_registration_modal(clicks, config.timings);

    if let Err(e) = install_close_modal_hook() {
        warn!("Could not install window.closeModal: {:?}", e);
    }
}

pub async fn run_app() -> Result<(), JsValue> {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::set_max_level(config.max_level());
    info!("University Clubs Website - scripts loaded");
    if let Err(e) = loaded {
        warn!("Ignoring #{}: {}", Config::ELEMENT_ID, e);
    }

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Scripts may load before the document has finished parsing.
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", move |_| initialize(config)).forget();
    } else {
        initialize(config);
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}
