use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Interval;
use gloo_utils::document;
use log::{debug, info};
use shared::{Slideshow, SlideshowEvent, Step, TimerCommand};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::dom::{query, query_all_in, set_active};

struct SlideshowController {
    machine: Slideshow,
    slides: Vec<Element>,
    dots: Vec<Element>,
    interval_ms: u32,
    timer: Option<Interval>,
}

impl SlideshowController {
    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    fn render(&self, index: usize) {
        for (i, slide) in self.slides.iter().enumerate() {
            set_active(slide, i == index);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_active(dot, i == index);
        }
        debug!("Showing slide: {}", index);
    }
}

type SharedController = Rc<RefCell<SlideshowController>>;

fn dispatch(controller: &SharedController, event: SlideshowEvent) {
    let step = controller.borrow_mut().machine.handle(event);
    if event.is_manual() {
        debug!("Slideshow {:?} -> {:?}", event, step);
    }
    apply(controller, step);
}

fn apply(controller: &SharedController, step: Step) {
    let mut ctl = controller.borrow_mut();
    if let Some(index) = step.show {
        ctl.render(index);
    }

    match step.timer {
        TimerCommand::Keep => {}
        TimerCommand::Stop => ctl.disarm(),
        TimerCommand::Restart => {
            ctl.disarm();
            let interval_ms = ctl.interval_ms;
            let weak = Rc::downgrade(controller);
            ctl.timer = Some(Interval::new(interval_ms, move || {
                if let Some(controller) = weak.upgrade() {
                    dispatch(&controller, SlideshowEvent::Tick);
                }
            }));
        }
    }
}

fn listen(target: &Element, event_type: &'static str, controller: &SharedController, event: SlideshowEvent) {
    let controller = controller.clone();
    EventListener::new(target, event_type, move |_| dispatch(&controller, event)).forget();
}

/// Starts the `.event-slideshow` on the page; returns `false` when there is none.
pub fn init_event_slideshow(interval_ms: u32) -> bool {
    let Some(root) = query(".event-slideshow") else {
        info!("No event slideshow found on this page");
        return false;
    };

    let slides = query_all_in(&root, ".slide");
    let dots = query_all_in(&root, ".dot");
    let Some(machine) = Slideshow::new(slides.len()) else {
        info!("Event slideshow has no slides");
        return false;
    };
    info!("Event slideshow initialized with {} slides", slides.len());
    if dots.len() != slides.len() {
        debug!("Slideshow has {} dots for {} slides", dots.len(), slides.len());
    }

    let controller: SharedController = Rc::new(RefCell::new(SlideshowController {
        machine,
        slides,
        dots: dots.clone(),
        interval_ms,
        timer: None,
    }));

    if let Ok(Some(next)) = root.query_selector(".slideshow-next") {
        listen(&next, "click", &controller, SlideshowEvent::Next);
    }
    if let Ok(Some(prev)) = root.query_selector(".slideshow-prev") {
        listen(&prev, "click", &controller, SlideshowEvent::Prev);
    }
    for (index, dot) in dots.iter().enumerate() {
        listen(dot, "click", &controller, SlideshowEvent::GoTo(index));
    }
    listen(&root, "mouseenter", &controller, SlideshowEvent::PointerEnter);
    listen(&root, "mouseleave", &controller, SlideshowEvent::PointerLeave);

    {
        let controller = controller.clone();
        EventListener::new(&document(), "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                return;
            };
            if let Some(nav) = SlideshowEvent::from_key(&key) {
                dispatch(&controller, nav);
            }
        })
        .forget();
    }

    let step = controller.borrow_mut().machine.start();
    apply(&controller, step);
    true
}
