//! Page configuration: element hooks, class names, and the form endpoint.
//!
//! Defaults mirror the production page. A page may override any subset of
//! fields by embedding a JSON object in `<script type="application/json"
//! id="site-config">`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Google Forms `formResponse` URL that receives contact submissions.
pub const FORM_ENDPOINT: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLScabZFfwyByU9nKtabVQaFgp9rRGQwg9U5vRTvpwEkUZ6sqkw/formResponse";

/// Visible fraction at which the intersection observer reports a section.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How long the success message stays up after a submission, in milliseconds.
pub const SUCCESS_HIDE_MS: u32 = 5000;

/// Blocking alert shown when the contact form could not be sent.
pub const ERROR_ALERT_MESSAGE: &str =
    "There was an error sending your message. Please try again.";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration block is not valid JSON for [`SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The reveal threshold is outside `0.0..=1.0`.
    #[error("reveal threshold must be within 0.0..=1.0, got {0}")]
    Threshold(f64),
}

/// Everything the four page behaviors need to find and mark elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu_button_id: String,
    pub menu_panel_id: String,
    pub reveal_selector: String,
    pub reveal_threshold: f64,
    pub form_id: String,
    pub success_message_id: String,
    pub form_endpoint: String,
    pub success_hide_ms: u32,
    pub scroller_selector: String,
    pub hidden_class: String,
    pub visible_class: String,
    pub override_class: String,
    pub error_alert_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_button_id: "mobile-menu-button".to_owned(),
            menu_panel_id: "mobile-menu".to_owned(),
            reveal_selector: ".fade-in-section".to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            form_id: "contact-form".to_owned(),
            success_message_id: "success-message".to_owned(),
            form_endpoint: FORM_ENDPOINT.to_owned(),
            success_hide_ms: SUCCESS_HIDE_MS,
            scroller_selector: ".scroller".to_owned(),
            hidden_class: "hidden".to_owned(),
            visible_class: "is-visible".to_owned(),
            override_class: "manual-override".to_owned(),
            error_alert_message: ERROR_ALERT_MESSAGE.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or the threshold is
    /// not a fraction.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        if !(0.0..=1.0).contains(&config.reveal_threshold) {
            return Err(ConfigError::Threshold(config.reveal_threshold));
        }
        Ok(config)
    }

    /// Parse an optional override block, falling back to defaults on error.
    #[must_use]
    pub fn from_page_block(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}
