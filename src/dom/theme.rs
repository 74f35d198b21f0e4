//! `localStorage`, `<html data-theme>`, and `matchMedia` behind [`ThemeBackend`].

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::{js_error_text, with_theme};
use crate::config::UiConfig;
use crate::consts::{PREFERS_DARK_QUERY, THEME_ATTRIBUTE};
use crate::error::UiError;
use crate::theme::{Theme, ThemeBackend};

pub struct BrowserTheme {
    storage: Option<Storage>,
    key: String,
    root: Element,
    toggle: Option<HtmlElement>,
    dark_query: Option<MediaQueryList>,
}

impl BrowserTheme {
    /// Resolve storage, the document root, the toggle icon, and the OS query.
    ///
    /// Only a missing `<html>` element is fatal; the other pieces degrade.
    pub fn bind(window: &Window, document: &Document, config: &UiConfig) -> Result<Self, UiError> {
        let root = document.document_element().ok_or_else(|| UiError::MissingElement("html".into()))?;

        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", js_error_text(&e));
                None
            }
        };

        let toggle_id = &config.elements.theme_toggle;
        let toggle = match document.get_element_by_id(toggle_id).map(JsCast::dyn_into::<HtmlElement>) {
            Some(Ok(el)) => Some(el),
            Some(Err(_)) | None => {
                log::info!("theme toggle #{toggle_id} not found; icon updates skipped");
                None
            }
        };

        let dark_query = match window.match_media(PREFERS_DARK_QUERY) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("matchMedia failed: {}", js_error_text(&e));
                None
            }
        };

        Ok(Self { storage, key: config.theme_storage_key.clone(), root, toggle, dark_query })
    }

    fn storage(&self) -> Result<&Storage, UiError> {
        self.storage.as_ref().ok_or_else(|| UiError::Storage("localStorage unavailable".into()))
    }
}

impl ThemeBackend for BrowserTheme {
    fn stored(&self) -> Result<Option<String>, UiError> {
        self.storage()?.get_item(&self.key).map_err(|e| UiError::Storage(js_error_text(&e)))
    }

    fn store(&self, value: &str) -> Result<(), UiError> {
        self.storage()?.set_item(&self.key, value).map_err(|e| UiError::Storage(js_error_text(&e)))
    }

    fn apply(&self, theme: Theme) -> Result<(), UiError> {
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        Ok(())
    }

    fn update_toggle(&self, icon: &str, tooltip: &str) -> Result<(), UiError> {
        if let Some(toggle) = &self.toggle {
            toggle.set_text_content(Some(icon));
            toggle.set_title(tooltip);
        }
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.dark_query.as_ref().is_some_and(MediaQueryList::matches)
    }
}

/// Follow OS dark-mode changes for the page lifetime.
pub fn install_system_listener(backend: &BrowserTheme) -> Result<(), UiError> {
    let Some(query) = &backend.dark_query else {
        return Ok(());
    };
    let on_change = Closure::wrap(Box::new(|event: MediaQueryListEvent| {
        with_theme(|t| t.system_preference_changed(event.matches()));
    }) as Box<dyn FnMut(MediaQueryListEvent)>);
    query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}
