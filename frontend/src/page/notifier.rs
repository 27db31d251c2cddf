use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use gloo_utils::document;
use log::debug;
use shared::Timings;
use uuid::Uuid;
use web_sys::{Element, Node};

use crate::dom::{query, set_style};

const BANNER_STYLE: &str = "background: var(--accent); color: white; padding: 1rem; \
    border-radius: 8px; margin: 1rem 0; text-align: center; font-weight: 500; \
    box-shadow: var(--shadow);";

struct Banner {
    id: Uuid,
    element: Element,
    pending: Option<Timeout>,
}

impl Banner {
    fn dismiss(self) {
        if let Some(timer) = self.pending {
            timer.cancel();
        }
        self.element.remove();
    }
}

/// Transient success banner shown above the first form on the page.
///
/// A new message replaces the banner on screen and cancels its timers.
#[derive(Clone)]
pub struct SuccessNotifier {
    timings: Timings,
    current: Rc<RefCell<Option<Banner>>>,
}

impl SuccessNotifier {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            current: Rc::new(RefCell::new(None)),
        }
    }

    pub fn show(&self, message: &str) -> anyhow::Result<()> {
        if let Some(previous) = self.current.borrow_mut().take() {
            debug!("Replacing success banner {}", previous.id);
            previous.dismiss();
        }

        let Some(form) = query("form") else {
            debug!("No form to anchor the success banner to");
            return Ok(());
        };
        let Some(parent) = form.parent_node() else {
            return Ok(());
        };

        let element = document().create_element("div").map_err(crate::dom::js_error)?;
        element.set_text_content(Some(message));
        element
            .set_attribute("style", BANNER_STYLE)
            .map_err(crate::dom::js_error)?;
        let anchor: &Node = &form;
        parent
            .insert_before(&element, Some(anchor))
            .map_err(crate::dom::js_error)?;

        let id = Uuid::new_v4();
        let fade = {
            let current = Rc::downgrade(&self.current);
            let fade_ms = self.timings.banner_fade_ms;
            Timeout::new(self.timings.banner_display_ms, move || {
                Self::fade_out(current, id, fade_ms);
            })
        };

        *self.current.borrow_mut() = Some(Banner {
            id,
            element,
            pending: Some(fade),
        });
        Ok(())
    }

    fn fade_out(current: Weak<RefCell<Option<Banner>>>, id: Uuid, fade_ms: u32) {
        let Some(cell) = current.upgrade() else {
            return;
        };
        let mut slot = cell.borrow_mut();
        let Some(banner) = slot.as_mut().filter(|banner| banner.id == id) else {
            return;
        };

        set_style(&banner.element, "opacity", "0");
        set_style(&banner.element, "transition", "opacity 0.5s ease");

        let removal = {
            let current = current.clone();
            Timeout::new(fade_ms, move || Self::remove(current, id))
        };
        banner.pending = Some(removal);
    }

    fn remove(current: Weak<RefCell<Option<Banner>>>, id: Uuid) {
        let Some(cell) = current.upgrade() else {
            return;
        };
        let mut slot = cell.borrow_mut();
        if slot.as_ref().is_some_and(|banner| banner.id == id) {
            if let Some(banner) = slot.take() {
                banner.dismiss();
            }
        }
    }
}
