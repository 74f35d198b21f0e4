//! Host configuration parsed from the JSON blob passed to `initChatUi`.
//!
//! Every field has a default, so an absent or empty object yields the stock
//! asset paths and element ids used by the chat templates.

use serde::Deserialize;

use crate::consts::{
    DEFAULT_NOTIFICATION_BADGE, DEFAULT_NOTIFICATION_DISMISS_MS, DEFAULT_NOTIFICATION_ICON,
    DEFAULT_NOTIFICATION_SOUND, DEFAULT_THEME_STORAGE_KEY, DEFAULT_UPLOAD_PREFIX,
};
use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Ids of the host elements the widgets bind to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub gallery: String,
    pub media_container: String,
    pub counter: String,
    pub prev_button: String,
    pub next_button: String,
    pub theme_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            gallery: "media-gallery".into(),
            media_container: "media-container".into(),
            counter: "media-counter".into(),
            prev_button: "prev-media-btn".into(),
            next_button: "next-media-btn".into(),
            theme_toggle: "theme-toggle".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Prefix joined with a stored filename to build its URL.
    pub upload_prefix: String,
    pub notification_icon: String,
    pub notification_badge: String,
    pub notification_sound: String,
    /// Milliseconds before a notification closes itself.
    pub notification_dismiss_ms: u32,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    pub log_level: String,
    pub elements: ElementIds,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            upload_prefix: DEFAULT_UPLOAD_PREFIX.into(),
            notification_icon: DEFAULT_NOTIFICATION_ICON.into(),
            notification_badge: DEFAULT_NOTIFICATION_BADGE.into(),
            notification_sound: DEFAULT_NOTIFICATION_SOUND.into(),
            notification_dismiss_ms: DEFAULT_NOTIFICATION_DISMISS_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.into(),
            log_level: "info".into(),
            elements: ElementIds::default(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// Missing fields take their defaults; unknown fields are rejected so a
    /// typo in the host template surfaces at init instead of silently using
    /// the default.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let raw = raw.trim();
        let config: Self = if raw.is_empty() {
            Self::default()
        } else {
            serde_json::from_str(raw).map_err(|e| UiError::Config(e.to_string()))?
        };
        config.validated()
    }

    /// Check invariants and normalize the upload prefix to end with `/`.
    pub fn validated(mut self) -> Result<Self, UiError> {
        if self.upload_prefix.trim().is_empty() {
            return Err(UiError::Config("upload_prefix must not be empty".into()));
        }
        if !self.upload_prefix.ends_with('/') {
            self.upload_prefix.push('/');
        }
        if self.notification_dismiss_ms == 0 {
            return Err(UiError::Config("notification_dismiss_ms must be positive".into()));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(UiError::Config("theme_storage_key must not be empty".into()));
        }
        parse_level(&self.log_level)?;
        Ok(self)
    }

    /// Configured log level.
    pub fn level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_level(raw: &str) -> Result<log::Level, UiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(UiError::Config(format!("unknown log_level: {other}"))),
    }
}
