//! Site-wide settings, with optional build-time overrides.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_TOAST_MESSAGE: &str = "Request sent successfully! We'll get back to you soon.";

/// Name of the build-time variable holding a JSON override document.
pub const CONFIG_ENV: &str = "SGN_SITE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Local storage key the theme preference is persisted under.
    pub theme_storage_key: String,
    pub contact_submit_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub toast_message: String,
    /// Scroll offset after which the navbar switches to its compact style.
    pub scroll_threshold_px: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".into(),
            contact_submit_delay_ms: 1200,
            toast_duration_ms: 5000,
            toast_message: DEFAULT_TOAST_MESSAGE.into(),
            scroll_threshold_px: 50,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parses an override document. Keys missing from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Loads the configuration baked in at build time through `SGN_SITE_CONFIG`.
    pub fn load() -> Result<Self, serde_json::Error> {
        match option_env!("SGN_SITE_CONFIG") {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact_submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
