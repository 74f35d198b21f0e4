//! Light/dark theme toggle persisted in `localStorage`.
//!
//! The active theme lives in the `data-theme` attribute on `<html>`. An
//! explicit choice is persisted; until one exists the OS preference decides,
//! including live changes to it.
//!
//! TRADE-OFFS
//! ==========
//! `toggle_theme` treats a missing value as "not dark" and switches to dark,
//! even when the OS preference already shows dark. Load and toggle therefore
//! disagree for a first-time visitor on a dark system; the first toggle is a
//! visible no-op. Kept as is until the product owner decides otherwise.

use crate::consts::{ICON_TO_DARK, ICON_TO_LIGHT, TOOLTIP_TO_DARK, TOOLTIP_TO_LIGHT};
use crate::error::UiError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact strings are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Icon and tooltip for the toggle while this theme is active; both
    /// advertise the theme a click would switch to.
    #[must_use]
    pub fn toggle_face(self) -> (&'static str, &'static str) {
        match self {
            Self::Dark => (ICON_TO_LIGHT, TOOLTIP_TO_LIGHT),
            Self::Light => (ICON_TO_DARK, TOOLTIP_TO_DARK),
        }
    }
}

/// Storage, document root, toggle icon, and OS preference.
pub trait ThemeBackend {
    /// Raw persisted value, if any.
    fn stored(&self) -> Result<Option<String>, UiError>;

    fn store(&self, value: &str) -> Result<(), UiError>;

    /// Set the theme attribute on the document root.
    fn apply(&self, theme: Theme) -> Result<(), UiError>;

    fn update_toggle(&self, icon: &str, tooltip: &str) -> Result<(), UiError>;

    /// Whether the OS currently asks for dark mode.
    fn prefers_dark(&self) -> bool;
}

pub struct ThemeToggle<B> {
    backend: B,
    current: Option<Theme>,
}

impl<B: ThemeBackend> ThemeToggle<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, current: None }
    }

    /// Persist `theme` and show it.
    ///
    /// A failed write is logged; the page still switches.
    pub fn set_theme(&mut self, theme: Theme) {
        if let Err(e) = self.backend.store(theme.as_str()) {
            log::warn!("theme {} not persisted: {e}", theme.as_str());
        }
        self.show(theme);
    }

    /// Switch to light if dark is persisted, otherwise to dark.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = match self.stored_raw().as_deref() {
            Some("dark") => Theme::Light,
            _ => Theme::Dark,
        };
        self.set_theme(next);
        next
    }

    /// Apply the persisted theme, or the OS preference when none is saved.
    ///
    /// The OS choice is not persisted, so later OS changes keep applying.
    pub fn load_saved_theme(&mut self) -> Theme {
        let theme = match self.stored_theme() {
            Some(theme) => theme,
            None => Theme::from_prefers_dark(self.backend.prefers_dark()),
        };
        self.show(theme);
        theme
    }

    /// OS preference changed. Applied only while nothing is persisted.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.stored_theme().is_some() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.show(theme);
        Some(theme)
    }

    /// Theme most recently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    fn show(&mut self, theme: Theme) {
        if let Err(e) = self.backend.apply(theme) {
            log::warn!("theme {} not applied: {e}", theme.as_str());
        }
        let (icon, tooltip) = theme.toggle_face();
        if let Err(e) = self.backend.update_toggle(icon, tooltip) {
            log::warn!("theme toggle not updated: {e}");
        }
        self.current = Some(theme);
    }

    fn stored_raw(&self) -> Option<String> {
        match self.backend.stored() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme not readable: {e}");
                None
            }
        }
    }

    fn stored_theme(&self) -> Option<Theme> {
        let raw = self.stored_raw()?;
        let theme = Theme::parse(&raw);
        if theme.is_none() {
            log::warn!("ignoring unknown persisted theme {raw:?}");
        }
        theme
    }
}
