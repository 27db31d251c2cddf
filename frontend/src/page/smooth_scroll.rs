use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::query;
use crate::events::ClickDispatcher;

pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

/// Replaces the jump to `#fragment` targets with a smooth scroll.
pub fn init_smooth_scrolling(clicks: &ClickDispatcher) {
    clicks
        .subscribe(IN_PAGE_ANCHOR, |anchor, event| {
            event.prevent_default();

            let href = anchor.get_attribute("href").unwrap_or_default();
            // A bare "#" is not a valid selector.
            if href.len() < 2 {
                return;
            }
            let Some(target) = query(&href) else {
                debug!("No scroll target for {}", href);
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })
        .forget();
}
