use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};
use crate::navigation::HOME_PAGE;

/// Delays used by the page scripts, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub slide_interval_ms: u32,
    pub submit_processing_ms: u32,
    pub success_reset_ms: u32,
    pub banner_display_ms: u32,
    pub banner_fade_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            slide_interval_ms: 5_000,
            submit_processing_ms: 2_000,
            success_reset_ms: 3_000,
            banner_display_ms: 4_000,
            banner_fade_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub home_page: String,
    pub log_level: String,
    pub timings: Timings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_page: HOME_PAGE.to_string(),
            log_level: "debug".to_string(),
            timings: Timings::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| SharedError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    /// Global ceiling for the `log` facade; `off` silences everything.
    pub fn max_level(&self) -> LevelFilter {
        self.level_filter().unwrap_or(LevelFilter::Debug)
    }

    /// Level for loggers that have no "off" setting. Pair it with
    /// [`SiteConfig::max_level`] so `off` still wins.
    pub fn log_level(&self) -> log::Level {
        self.max_level().to_level().unwrap_or(log::Level::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = SiteConfig::default();
        assert_eq!(config.home_page, "index.html");
        assert_eq!(config.timings.slide_interval_ms, 5000);
        assert_eq!(config.timings.submit_processing_ms, 2000);
        assert_eq!(config.timings.success_reset_ms, 3000);
        assert_eq!(config.timings.banner_display_ms, 4000);
        assert_eq!(config.timings.banner_fade_ms, 500);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "timings": { "slide_interval_ms": 8000 }, "log_level": "info" }"#).unwrap();

        assert_eq!(config.timings.slide_interval_ms, 8000);
        assert_eq!(config.timings.banner_fade_ms, 500);
        assert_eq!(config.home_page, "index.html");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn malformed_json_is_a_conversion_error() {
        let err = SiteConfig::from_json("{ timings: ").unwrap_err();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn unknown_level_is_a_config_error() {
        let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, SharedError::Config(_)));
    }

    #[test]
    fn off_level_silences_logging() {
        let config = SiteConfig::from_json(r#"{ "log_level": "off" }"#).unwrap();
        assert_eq!(config.max_level(), LevelFilter::Off);
        assert_eq!(config.log_level(), log::Level::Error);
    }

    #[test]
    fn max_level_follows_configured_level() {
        let config = SiteConfig::from_json(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.max_level(), LevelFilter::Warn);
        assert_eq!(SiteConfig::default().max_level(), LevelFilter::Debug);
    }
}
