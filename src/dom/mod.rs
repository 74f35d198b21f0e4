//! Browser bindings and the JavaScript entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat templates call these exports from inline handlers and the socket
//! client (`openMediaGallery(...)`, `toggleTheme()`, ...). Each widget
//! controller lives in a thread-local slot filled by `initChatUi`; DOM event
//! closures reach it through the same slot, so there is exactly one gallery,
//! one notifier, and one theme toggle per page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::thread::LocalKey;

use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::gallery::Gallery;
use crate::notify::Notifier;
use crate::theme::{Theme, ThemeToggle};

pub mod gallery;
pub mod notify;
pub mod theme;

use self::gallery::DomGalleryView;
use self::notify::BrowserNotifications;
use self::theme::BrowserTheme;

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    static GALLERY: RefCell<Option<Gallery<DomGalleryView>>> = const { RefCell::new(None) };
    static NOTIFIER: RefCell<Option<Rc<Notifier<BrowserNotifications>>>> = const { RefCell::new(None) };
    static THEME: RefCell<Option<ThemeToggle<BrowserTheme>>> = const { RefCell::new(None) };
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Dom(js_error_text(&value))
    }
}

/// Readable text for a thrown JS value.
pub(crate) fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

fn with_slot<T, R>(slot: &'static LocalKey<RefCell<Option<T>>>, name: &str, f: impl FnOnce(&mut T) -> R) -> Option<R> {
    slot.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(widget) => Some(f(widget)),
            None => {
                log::warn!("{name} not initialized; call initChatUi first");
                None
            }
        },
        Err(_) => {
            log::warn!("{name} busy; event dropped");
            None
        }
    })
}

pub(crate) fn with_gallery<R>(f: impl FnOnce(&mut Gallery<DomGalleryView>) -> R) -> Option<R> {
    with_slot(&GALLERY, "gallery", f)
}

pub(crate) fn with_theme<R>(f: impl FnOnce(&mut ThemeToggle<BrowserTheme>) -> R) -> Option<R> {
    with_slot(&THEME, "theme toggle", f)
}

fn notifier() -> Option<Rc<Notifier<BrowserNotifications>>> {
    let notifier = NOTIFIER.with(|cell| cell.borrow().clone());
    if notifier.is_none() {
        log::warn!("notifier not initialized; call initChatUi first");
    }
    notifier
}

// --- Setup ---

/// Install logging, bind the widgets to the page, and apply the saved theme.
///
/// `config` is an optional JSON object (see `UiConfig`). A malformed config
/// is the only error surfaced to the host. A missing gallery markup only
/// disables the gallery.
#[wasm_bindgen(js_name = initChatUi)]
pub fn init(config: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config =
        UiConfig::from_json(config.as_deref().unwrap_or_default()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("console logger already installed");
    }
    if INITIALIZED.with(|flag| flag.replace(true)) {
        log::warn!("initChatUi called twice; keeping the first setup");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    match DomGalleryView::bind(&document, &config.elements) {
        Ok(view) => {
            let root = view.root().clone();
            GALLERY.with(|cell| *cell.borrow_mut() = Some(Gallery::new(view, config.upload_prefix.clone())));
            if let Err(e) = gallery::install_page_listeners(&document, &root) {
                log::warn!("gallery listeners not installed: {e}");
            }
        }
        Err(e) => log::warn!("gallery disabled: {e}"),
    }

    let notifications = Notifier::new(BrowserNotifications::new(window.clone()), &config);
    NOTIFIER.with(|cell| *cell.borrow_mut() = Some(Rc::new(notifications)));

    match BrowserTheme::bind(&window, &document, &config) {
        Ok(backend) => {
            if let Err(e) = theme::install_system_listener(&backend) {
                log::warn!("system theme listener not installed: {e}");
            }
            THEME.with(|cell| *cell.borrow_mut() = Some(ThemeToggle::new(backend)));
            with_theme(ThemeToggle::load_saved_theme);
        }
        Err(e) => log::warn!("theme toggle disabled: {e}"),
    }

    log::info!("chat ui initialized");
    Ok(())
}

// --- Gallery ---

#[wasm_bindgen(js_name = openMediaGallery)]
pub fn open_media_gallery(items: js_sys::Array, start_index: Option<u32>) {
    let total = items.length();
    let names: Vec<String> = items.iter().filter_map(|item| item.as_string()).collect();
    if names.len() != total as usize {
        log::warn!("openMediaGallery skipped {} non-string items", total as usize - names.len());
    }
    let start = start_index.unwrap_or(0) as usize;
    with_gallery(|g| g.open(names, start));
}

#[wasm_bindgen(js_name = nextMedia)]
pub fn next_media() {
    with_gallery(Gallery::next);
}

#[wasm_bindgen(js_name = prevMedia)]
pub fn prev_media() {
    with_gallery(Gallery::prev);
}

#[wasm_bindgen(js_name = closeMediaGallery)]
pub fn close_media_gallery() {
    with_gallery(Gallery::close);
}

#[wasm_bindgen(js_name = zoomIn)]
pub fn zoom_in() {
    with_gallery(Gallery::zoom_in);
}

#[wasm_bindgen(js_name = zoomOut)]
pub fn zoom_out() {
    with_gallery(Gallery::zoom_out);
}

#[wasm_bindgen(js_name = resetZoom)]
pub fn reset_zoom() {
    with_gallery(Gallery::reset_zoom);
}

// --- Notifications ---

#[wasm_bindgen(js_name = requestNotificationPermission)]
pub fn request_notification_permission() {
    let Some(notifier) = notifier() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        notifier.request_permission().await;
    });
}

/// Returns whether a notification was shown.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(sender: &str, message: &str) -> bool {
    notifier().is_some_and(|n| n.show(sender, message))
}

#[wasm_bindgen(js_name = playNotificationSound)]
pub fn play_notification_sound() {
    let Some(notifier) = notifier() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        notifier.play_sound().await;
    });
}

/// Entry point for the socket's `push_notification` event (JSON string).
#[wasm_bindgen(js_name = handlePushNotification)]
pub fn handle_push_notification(payload: String) {
    let Some(notifier) = notifier() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        notifier.handle_push(&payload).await;
    });
}

// --- Theme ---

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) {
    match Theme::parse(name) {
        Some(theme) => {
            with_theme(|t| t.set_theme(theme));
        }
        None => log::warn!("setTheme ignored unknown theme {name:?}"),
    }
}

/// Returns the theme switched to.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    with_theme(|t| t.toggle_theme().as_str().to_owned())
}

/// Returns the theme applied.
#[wasm_bindgen(js_name = loadSavedTheme)]
pub fn load_saved_theme() -> Option<String> {
    with_theme(|t| t.load_saved_theme().as_str().to_owned())
}
