//! Notification API and `<audio>` playback behind [`NotificationBackend`].

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, Notification, NotificationOptions, NotificationPermission, Window};

use super::js_error_text;
use crate::error::UiError;
use crate::notify::{NotificationBackend, NotificationRequest, Permission};

pub struct BrowserNotifications {
    window: Window,
}

impl BrowserNotifications {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl NotificationBackend for BrowserNotifications {
    fn is_supported(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("Notification")).unwrap_or(false)
    }

    fn permission(&self) -> Permission {
        match Notification::permission() {
            NotificationPermission::Granted => Permission::Granted,
            NotificationPermission::Denied => Permission::Denied,
            _ => Permission::Default,
        }
    }

    async fn request_permission(&self) -> Result<Permission, UiError> {
        let promise = Notification::request_permission().map_err(|e| UiError::Permission(js_error_text(&e)))?;
        let answer = JsFuture::from(promise).await.map_err(|e| UiError::Permission(js_error_text(&e)))?;
        Ok(answer.as_string().map_or(Permission::Default, |raw| Permission::parse(&raw)))
    }

    fn display(&self, request: &NotificationRequest) -> Result<(), UiError> {
        let options = NotificationOptions::new();
        options.set_body(&request.body);
        options.set_icon(&request.icon);
        options.set_badge(&request.badge);
        let notification = Notification::new_with_options(&request.title, &options)?;

        let window = self.window.clone();
        let clicked = notification.clone();
        let on_click = Closure::once_into_js(move || {
            if let Err(e) = window.focus() {
                log::debug!("window focus refused: {}", js_error_text(&e));
            }
            clicked.close();
        });
        notification.set_onclick(Some(on_click.unchecked_ref()));

        // Fire-and-forget; a click may close it first.
        let millis = u32::try_from(request.dismiss_after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || notification.close()).forget();
        Ok(())
    }

    async fn play(&self, src: &str) -> Result<(), UiError> {
        let audio = HtmlAudioElement::new_with_src(src).map_err(|e| UiError::Playback(js_error_text(&e)))?;
        let started = audio.play().map_err(|e| UiError::Playback(js_error_text(&e)))?;
        JsFuture::from(started).await.map_err(|e| UiError::Playback(js_error_text(&e)))?;
        Ok(())
    }
}
