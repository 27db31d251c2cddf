use gloo_utils::document;
use shared::SiteConfig;

pub struct Config;

impl Config {
    /// Id of the optional `<script type="application/json">` block holding overrides.
    pub const ELEMENT_ID: &'static str = "site-config";

    pub fn load() -> shared::Result<SiteConfig> {
        // Pages without an override block run on the built-in defaults.
        let raw = document()
            .get_element_by_id(Self::ELEMENT_ID)
            .and_then(|element| element.text_content())
            .unwrap_or_default();

        if raw.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        SiteConfig::from_json(&raw)
    }
}
