//! Page-wide scripts. Each controller looks for its own markup and stays
//! inactive when the page does not have it.

pub mod form_validation;
pub mod mobile_menu;
pub mod nav_highlight;
pub mod notifier;
pub mod slideshow;
pub mod smooth_scroll;

use log::{info, warn};
use shared::SiteConfig;

use crate::events::ClickDispatcher;
use notifier::SuccessNotifier;

pub fn init_all(config: &SiteConfig, clicks: &ClickDispatcher) {
    if let Err(e) = nav_highlight::highlight_current_page(&config.home_page) {
        warn!("Navigation highlighting skipped: {}", e);
    }
    mobile_menu::init_mobile_menu(clicks);

    let notifier = SuccessNotifier::new(config.timings);
    let forms = form_validation::init_form_validation(&notifier);
    info!("Form validation bound to {} form(s)", forms);

    slideshow::init_event_slideshow(config.timings.slide_interval_ms);
    smooth_scroll::init_smooth_scrolling(clicks);

    info!("All page scripts initialized");
}
