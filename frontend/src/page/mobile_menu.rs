use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::debug;
use shared::MenuState;
use web_sys::Element;

use crate::dom::{query, set_active};
use crate::events::ClickDispatcher;

struct MobileMenu {
    hamburger: Element,
    menu: Element,
    state: Cell<MenuState>,
}

impl MobileMenu {
    fn render(&self) {
        let open = self.state.get().is_open();
        set_active(&self.hamburger, open);
        set_active(&self.menu, open);
    }

    fn toggle(&self) {
        let mut state = self.state.get();
        let open = state.toggle();
        self.state.set(state);
        self.render();
        debug!("Mobile menu toggled, open: {}", open);
    }

    fn close(&self) {
        let mut state = self.state.get();
        state.close();
        self.state.set(state);
        self.render();
    }
}

/// Wires the hamburger button; returns `false` when the page has no mobile menu.
pub fn init_mobile_menu(clicks: &ClickDispatcher) -> bool {
    let (Some(hamburger), Some(menu)) = (query(".hamburger"), query(".nav-menu")) else {
        debug!("No mobile menu on this page");
        return false;
    };

    let controller = Rc::new(MobileMenu {
        hamburger,
        menu,
        state: Cell::new(MenuState::default()),
    });

    {
        let hamburger = controller.hamburger.clone();
        let controller = controller.clone();
        EventListener::new(&hamburger, "click", move |_| controller.toggle()).forget();
    }

    clicks
        .subscribe(".nav-link", move |_, _| controller.close())
        .forget();
    true
}
