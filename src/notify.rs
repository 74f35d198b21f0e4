//! Desktop notifications and the message sound.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat page calls into this module when a message arrives for a room the
//! user is not looking at. Permission is owned by the browser; this module
//! only reads and requests it. Every failure (missing API, denied permission,
//! autoplay refusal) ends in a log line, never in an error for the caller.

use std::time::Duration;

use serde::Deserialize;

use crate::config::UiConfig;
use crate::error::UiError;

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Browser notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Not asked yet (or dismissed without a choice).
    #[default]
    Default,
    Granted,
    Denied,
}

impl Permission {
    /// Parse the browser's string form; anything unrecognized is `Default`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// Everything the browser needs to show one notification.
///
/// A click focuses the window and closes the notification; independently it
/// closes itself after `dismiss_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub dismiss_after: Duration,
}

/// Browser notification and audio APIs.
#[allow(async_fn_in_trait)]
pub trait NotificationBackend {
    /// Whether the Notification API exists at all.
    fn is_supported(&self) -> bool;

    fn permission(&self) -> Permission;

    /// Ask the user. Resolves when they answer.
    async fn request_permission(&self) -> Result<Permission, UiError>;

    fn display(&self, request: &NotificationRequest) -> Result<(), UiError>;

    /// Play an audio resource to completion of the `play()` promise.
    async fn play(&self, src: &str) -> Result<(), UiError>;
}

/// `push_notification` event body sent by the chat server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushNotification {
    pub sender: String,
    pub message: String,
}

/// Notification helper bound to a backend and the configured assets.
pub struct Notifier<B> {
    backend: B,
    icon: String,
    badge: String,
    sound: String,
    dismiss_after: Duration,
}

impl<B: NotificationBackend> Notifier<B> {
    #[must_use]
    pub fn new(backend: B, config: &UiConfig) -> Self {
        Self {
            backend,
            icon: config.notification_icon.clone(),
            badge: config.notification_badge.clone(),
            sound: config.notification_sound.clone(),
            dismiss_after: Duration::from_millis(u64::from(config.notification_dismiss_ms)),
        }
    }

    /// Ask for permission unless the user has already decided.
    ///
    /// Returns the permission after the call; `Default` when the API is
    /// missing or the request failed.
    pub async fn request_permission(&self) -> Permission {
        if !self.backend.is_supported() {
            log::info!("browser does not support notifications");
            return Permission::Default;
        }
        let current = self.backend.permission();
        match current {
            Permission::Granted => {
                log::info!("notification permission already granted");
                return current;
            }
            Permission::Denied => {
                log::info!("notification permission denied; not asking again");
                return current;
            }
            Permission::Default => {}
        }
        match self.backend.request_permission().await {
            Ok(permission) => {
                log::info!("notification permission: {}", permission.as_str());
                permission
            }
            Err(e) => {
                log::warn!("{e}");
                Permission::Default
            }
        }
    }

    /// Show a desktop notification for a message from `sender`.
    ///
    /// Does nothing unless permission is granted. Returns whether a
    /// notification was displayed.
    pub fn show(&self, sender: &str, message: &str) -> bool {
        if !self.backend.is_supported() || self.backend.permission() != Permission::Granted {
            log::debug!("notification from {sender} skipped: permission not granted");
            return false;
        }
        let request = NotificationRequest {
            title: format!("{sender} wrote:"),
            body: message.to_owned(),
            icon: self.icon.clone(),
            badge: self.badge.clone(),
            dismiss_after: self.dismiss_after,
        };
        match self.backend.display(&request) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("notification from {sender} not shown: {e}");
                false
            }
        }
    }

    /// Play the message sound. Returns whether playback started.
    pub async fn play_sound(&self) -> bool {
        match self.backend.play(&self.sound).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not play notification sound: {e}");
                false
            }
        }
    }

    /// Handle a raw `push_notification` payload: notify, then play the sound.
    pub async fn handle_push(&self, raw: &str) {
        let push: PushNotification = match serde_json::from_str(raw) {
            Ok(push) => push,
            Err(e) => {
                log::warn!("{}", UiError::from(e));
                return;
            }
        };
        self.show(&push.sender, &push.message);
        self.play_sound().await;
    }
}
