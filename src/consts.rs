//! Shared constants for the gallery, notification, and theme widgets.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the gallery allows.
pub const ZOOM_MIN: f64 = 0.25;

/// Largest zoom factor the gallery allows.
pub const ZOOM_MAX: f64 = 3.0;

/// Increment applied by a single zoom-in or zoom-out.
pub const ZOOM_STEP: f64 = 0.25;

/// Neutral zoom factor restored on reset, media change, and close.
pub const ZOOM_DEFAULT: f64 = 1.0;

// ── Media classification ────────────────────────────────────────

/// Extensions rendered as an `<img>`.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Extensions rendered as a `<video>`.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];

/// Class shared by every rendered media element; the transform target.
pub const MEDIA_ITEM_CLASS: &str = "gallery-media-item";

/// Class of the download fallback for unsupported files.
pub const UNSUPPORTED_CLASS: &str = "unsupported-media";

pub const UNSUPPORTED_MESSAGE: &str = "Unsupported file format";
pub const DOWNLOAD_LABEL: &str = "Download file";
pub const IMAGE_ALT: &str = "Media item";

// ── Defaults for the host configuration ─────────────────────────

pub const DEFAULT_UPLOAD_PREFIX: &str = "/uploads/";
pub const DEFAULT_NOTIFICATION_ICON: &str = "/static/bell.png";
pub const DEFAULT_NOTIFICATION_BADGE: &str = "/static/badge.png";
pub const DEFAULT_NOTIFICATION_SOUND: &str = "/static/message.mp3";

/// Delay before a shown notification closes itself.
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u32 = 5000;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

// ── Theme toggle ────────────────────────────────────────────────

/// Attribute on `<html>` that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the OS-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub const ICON_TO_LIGHT: &str = "\u{2600}\u{fe0f}";
pub const ICON_TO_DARK: &str = "\u{1f319}";
pub const TOOLTIP_TO_LIGHT: &str = "Switch to light theme";
pub const TOOLTIP_TO_DARK: &str = "Switch to dark theme";
