//! Document-level click delegation.
//!
//! One listener sits on the document. Components register a CSS selector
//! together with a handler; when a click lands inside an element matching
//! the selector, the handler receives that element. Registration order is
//! the call order when several selectors match the same click.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent};

type Handler = Rc<dyn Fn(&Element, &MouseEvent)>;

struct Route {
    id: u64,
    selector: String,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    routes: Vec<Route>,
}

impl Registry {
    fn insert(&mut self, selector: &str, handler: Handler) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.routes.push(Route {
            id,
            selector: selector.to_string(),
            handler,
        });
        id
    }

    fn remove(&mut self, id: u64) {
        self.routes.retain(|route| route.id != id);
    }

    fn snapshot(&self) -> Vec<(String, Handler)> {
        self.routes
            .iter()
            .map(|route| (route.selector.clone(), route.handler.clone()))
            .collect()
    }
}

#[derive(Clone)]
pub struct ClickDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl PartialEq for ClickDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for ClickDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("routes", &self.len())
            .finish()
    }
}

impl ClickDispatcher {
    /// Dispatcher with no DOM listener; clicks are fed through [`Self::dispatch`].
    pub fn detached() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Installs the single click listener on `target` for the life of the page.
    pub fn attach(target: &EventTarget) -> Self {
        let dispatcher = Self::detached();
        let listener = {
            let dispatcher = dispatcher.clone();
            EventListener::new(target, "click", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    dispatcher.dispatch(event);
                }
            })
        };
        listener.forget();
        dispatcher
    }

    pub fn subscribe<F>(&self, selector: &str, handler: F) -> Subscription
    where
        F: Fn(&Element, &MouseEvent) + 'static,
    {
        let id = self.registry.borrow_mut().insert(selector, Rc::new(handler));
        debug!("Click route {} registered for '{}'", id, selector);
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatch(&self, event: &MouseEvent) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        // Handlers may subscribe or unsubscribe, so run them outside the borrow.
        let routes = self.registry.borrow().snapshot();
        for (selector, handler) in routes {
            match target.closest(&selector) {
                Ok(Some(matched)) => handler(&matched, event),
                Ok(None) => {}
                Err(e) => debug!("Selector '{}' rejected: {:?}", selector, e),
            }
        }
    }
}

/// Keeps a click route registered until dropped.
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Keeps the route for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}
