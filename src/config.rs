//! Page-level configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages may embed a `<script type="application/json" id="sitekit-config">`
//! block to override selectors, thresholds, copy, and timings. Every field has
//! a default, so an absent or partial block behaves like the stock site.
//!
//! TRADE-OFFS
//! ==========
//! A malformed block is reported and ignored rather than aborting startup;
//! the defaults describe the markup the site ships with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Element id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "sitekit-config";

/// Top-level configuration for every controller.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub selectors: Selectors,
    pub scroll: ScrollThresholds,
    pub form: FormConfig,
    pub reveal: RevealConfig,
    pub year_token: YearToken,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse a configuration block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Console log verbosity.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// CSS selectors for the elements each controller binds to.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub nav: String,
    pub nav_links: String,
    pub contact_form: String,
    pub footer_paragraphs: String,
    pub reveal_targets: String,
    pub lazy_images: String,
    /// Element id (not selector) that receives focus after scrolling to top.
    pub main_content_id: String,
    pub theme_toggle_host: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: ".site-header".to_owned(),
            nav: ".nav".to_owned(),
            nav_links: ".nav a".to_owned(),
            contact_form: ".contact form".to_owned(),
            footer_paragraphs: "footer p".to_owned(),
            reveal_targets: ".feature, article".to_owned(),
            lazy_images: "img[data-src]".to_owned(),
            main_content_id: "main-content".to_owned(),
            theme_toggle_host: ".site-header .container".to_owned(),
        }
    }
}

/// Scroll offsets (CSS pixels) past which the scroll effects switch on.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollThresholds {
    pub header_offset: f64,
    pub back_to_top_offset: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self { header_offset: 50.0, back_to_top_offset: 300.0 }
    }
}

/// Contact form timings and copy.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u32,
    pub banner_ttl_ms: u32,
    pub sending_label: String,
    pub success_message: String,
    pub name_error: String,
    pub email_error: String,
    pub message_error: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            banner_ttl_ms: 5000,
            sending_label: "Sending...".to_owned(),
            success_message: "Message sent! Thank you.".to_owned(),
            name_error: "Name must be at least 2 characters".to_owned(),
            email_error: "Email is not valid".to_owned(),
            message_error: "Message must be at least 10 characters".to_owned(),
        }
    }
}

/// Intersection observer options for reveal animations.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin: "0px 0px -100px 0px".to_owned() }
    }
}

/// The literal year written into the footer markup.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct YearToken(pub String);

impl Default for YearToken {
    fn default() -> Self {
        Self("2025".to_owned())
    }
}

impl YearToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Theme persistence and the opt-in toggle button.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_enabled: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: "theme".to_owned(), toggle_enabled: false }
    }
}
