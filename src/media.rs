//! Media classification by filename extension and upload URL construction.

use crate::consts::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// How the gallery renders a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Rendered as an `<img>` with zoom, drag, and double-click handlers.
    Image,
    /// Rendered as a `<video>` with native controls and autoplay.
    Video,
    /// Rendered as a download link.
    Unsupported,
}

impl MediaKind {
    /// Classify a filename by the text after its last `.`, ignoring case.
    ///
    /// A name without a dot has no extension and is unsupported.
    #[must_use]
    pub fn classify(file_name: &str) -> Self {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return Self::Unsupported;
        };
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Video
        } else {
            Self::Unsupported
        }
    }
}

/// URL of an uploaded file: the upload prefix followed by the stored name.
#[must_use]
pub fn media_url(prefix: &str, file_name: &str) -> String {
    format!("{prefix}{file_name}")
}

/// Render description for the item under the gallery cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub kind: MediaKind,
    pub url: String,
    pub file_name: String,
}

impl Slide {
    #[must_use]
    pub fn new(prefix: &str, file_name: &str) -> Self {
        Self { kind: MediaKind::classify(file_name), url: media_url(prefix, file_name), file_name: file_name.to_owned() }
    }
}
