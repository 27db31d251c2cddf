use serde::{Deserialize, Serialize};

pub const HOME_PAGE: &str = "index.html";

/// File name of the page being shown, taken from a URL path.
///
/// An empty last segment (`/` or `/clubs/`) resolves to `home_page`.
pub fn current_page(pathname: &str, home_page: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => home_page.to_string(),
    }
}

/// Whether a nav link with `href` should carry the active class.
pub fn is_active_link(href: &str, current_page: &str, home_page: &str) -> bool {
    if href == current_page {
        return true;
    }
    current_page.is_empty() && href == home_page
}

/// Open/closed state shared by the hamburger button and the nav menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "index.html")]
    #[case("/", "index.html")]
    #[case("/site/", "index.html")]
    #[case("/contact.html", "contact.html")]
    #[case("/site/clubs.html", "clubs.html")]
    #[case("events.html", "events.html")]
    fn resolves_page_from_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(current_page(path, HOME_PAGE), expected);
    }

    #[test]
    fn empty_path_highlights_home_link() {
        let page = current_page("", HOME_PAGE);
        let links = ["index.html", "clubs.html", "contact.html"];

        let active: Vec<_> = links
            .iter()
            .filter(|href| is_active_link(href, &page, HOME_PAGE))
            .collect();

        assert_eq!(active, vec![&"index.html"]);
    }

    #[test]
    fn only_matching_link_is_active() {
        let links = ["index.html", "clubs.html", "contact.html", "events.html"];

        let active: Vec<_> = links
            .iter()
            .filter(|href| is_active_link(href, "contact.html", HOME_PAGE))
            .collect();

        assert_eq!(active, vec![&"contact.html"]);
    }

    #[test]
    fn blank_page_name_still_marks_home() {
        assert!(is_active_link("index.html", "", HOME_PAGE));
        assert!(!is_active_link("clubs.html", "", HOME_PAGE));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
