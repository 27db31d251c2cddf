use gloo_utils::window;
use log::{debug, info};
use shared::{current_page, is_active_link};

use crate::dom::{query_all, set_active};

/// Marks the `.nav-link` whose href names the current page.
pub fn highlight_current_page(home_page: &str) -> anyhow::Result<()> {
    let pathname = window()
        .location()
        .pathname()
        .map_err(crate::dom::js_error)?;
    let page = current_page(&pathname, home_page);
    info!("Current page: {}", page);

    for link in query_all(".nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = is_active_link(&href, &page, home_page);
        set_active(&link, active);
        if active {
            debug!("Active page: {}", href);
        }
    }
    Ok(())
}
