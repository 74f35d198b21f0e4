//! Lightbox media gallery: ordered items, a cursor, and zoom/pan of the
//! rendered element.
//!
//! DESIGN
//! ======
//! `Gallery` owns all gallery state and exposes it only through the
//! operations below, so the cursor and zoom invariants hold no matter which
//! event handler fires. The page is reached through [`GalleryView`], an
//! injected collaborator; the `dom` module implements it with `web-sys` and
//! tests implement it with a recording fake.
//!
//! STATE
//! =====
//! closed -> open (`open`) -> closed (`close`, Escape, background click).
//! While open, zoom/pan and the drag gesture cycle independently of
//! navigation, and every media change resets them.

use crate::error::UiError;
use crate::gesture::DragGesture;
use crate::media::{MediaKind, Slide};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Pointer cursor shown over a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCursor {
    Grab,
    Grabbing,
}

impl MediaCursor {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Page elements the gallery drives.
///
/// Implementations touch only the elements they were built with; failures are
/// reported back and logged by the controller.
pub trait GalleryView {
    /// Show (`display: flex`) or hide (`display: none`) the gallery root.
    fn set_visible(&mut self, visible: bool) -> Result<(), UiError>;

    /// Whether the gallery root is currently shown.
    fn is_visible(&self) -> bool;

    /// Remove whatever the render container holds.
    fn clear(&mut self) -> Result<(), UiError>;

    /// Populate the render container for `slide`.
    fn render(&mut self, slide: &Slide) -> Result<(), UiError>;

    fn set_counter(&mut self, text: &str) -> Result<(), UiError>;

    /// Toggle the prev/next buttons.
    fn set_nav(&mut self, prev_visible: bool, next_visible: bool) -> Result<(), UiError>;

    /// Set the CSS transform of the rendered media element, if any.
    fn apply_transform(&mut self, transform: &str) -> Result<(), UiError>;

    fn set_media_cursor(&mut self, cursor: MediaCursor) -> Result<(), UiError>;
}

/// Gallery controller. One instance per page.
pub struct Gallery<V> {
    view: V,
    upload_prefix: String,
    items: Vec<String>,
    cursor: usize,
    viewport: Viewport,
    drag: DragGesture,
    open: bool,
    media_ready: bool,
}

impl<V: GalleryView> Gallery<V> {
    #[must_use]
    pub fn new(view: V, upload_prefix: impl Into<String>) -> Self {
        Self {
            view,
            upload_prefix: upload_prefix.into(),
            items: Vec::new(),
            cursor: 0,
            viewport: Viewport::default(),
            drag: DragGesture::Idle,
            open: false,
            media_ready: false,
        }
    }

    // --- Lifecycle ---

    /// Replace the gallery contents and show the item at `start_index`.
    ///
    /// An empty list leaves the gallery closed. An index past the end is
    /// clamped to the last item.
    pub fn open(&mut self, items: Vec<String>, start_index: usize) {
        if items.is_empty() {
            log::warn!("gallery open ignored: no media items");
            return;
        }
        let last = items.len() - 1;
        if start_index > last {
            log::warn!("gallery start index {start_index} out of range for {} items", items.len());
        }
        self.items = items;
        self.cursor = start_index.min(last);
        self.open = true;
        self.show_current();
        report("show", self.view.set_visible(true));
    }

    /// Hide the gallery and forget its contents.
    ///
    /// The render container is emptied too, so a playing video stops.
    pub fn close(&mut self) {
        report("hide", self.view.set_visible(false));
        report("clear", self.view.clear());
        self.items.clear();
        self.cursor = 0;
        self.viewport.reset();
        self.drag = DragGesture::Idle;
        self.open = false;
        self.media_ready = false;
    }

    // --- Rendering ---

    /// Render the item under the cursor, its counter, and the nav buttons.
    pub fn show_current(&mut self) {
        let Some(name) = self.items.get(self.cursor) else {
            return;
        };
        let slide = Slide::new(&self.upload_prefix, name);
        log::debug!("gallery showing {} ({:?})", slide.file_name, slide.kind);

        self.viewport.reset();
        self.drag = DragGesture::Idle;
        self.media_ready = false;

        report("clear", self.view.clear());
        report("render", self.view.render(&slide));

        let total = self.items.len();
        report("counter", self.view.set_counter(&format!("{} / {total}", self.cursor + 1)));
        report("nav", self.view.set_nav(self.cursor > 0, self.cursor + 1 < total));
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            self.show_current();
        }
    }

    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.show_current();
        }
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) {
        if self.open && self.viewport.zoom_in() {
            self.apply_transform();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.open && self.viewport.zoom_out() {
            self.apply_transform();
        }
    }

    pub fn reset_zoom(&mut self) {
        if !self.open {
            return;
        }
        self.viewport.reset();
        self.drag = DragGesture::Idle;
        self.apply_transform();
    }

    // --- Image events ---

    /// The current image finished loading; drag and double-click go live.
    pub fn media_loaded(&mut self) {
        if !self.open || self.current_kind() != Some(MediaKind::Image) {
            return;
        }
        self.media_ready = true;
        report("cursor", self.view.set_media_cursor(MediaCursor::Grab));
    }

    /// Binary toggle: zoom in from 1.0, otherwise reset.
    pub fn double_click(&mut self) {
        if !self.media_ready {
            return;
        }
        if self.viewport.is_neutral() {
            self.zoom_in();
        } else {
            self.reset_zoom();
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.media_ready && self.drag.begin(Point::new(x, y), &self.viewport) {
            report("cursor", self.view.set_media_cursor(MediaCursor::Grabbing));
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.drag.update(Point::new(x, y), &mut self.viewport) {
            self.apply_transform();
        }
    }

    pub fn pointer_up(&mut self) {
        if self.drag.end() {
            report("cursor", self.view.set_media_cursor(MediaCursor::Grab));
        }
    }

    /// Leaving the element ends the drag the same way releasing does.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    // --- Page events ---

    /// Escape closes the gallery, but only while it is shown.
    pub fn key_down(&mut self, key: &str) {
        if key == "Escape" && self.view.is_visible() {
            self.close();
        }
    }

    /// Clicks that land on the backdrop itself close the gallery; clicks on
    /// its content bubble up with a different target and are ignored.
    pub fn background_click(&mut self, target_is_root: bool) {
        if target_is_root {
            self.close();
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    #[must_use]
    pub fn current_kind(&self) -> Option<MediaKind> {
        self.current().map(MediaKind::classify)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.viewport.pan()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply_transform(&mut self) {
        report("transform", self.view.apply_transform(&self.viewport.css_transform()));
    }
}

fn report(step: &str, result: Result<(), UiError>) {
    if let Err(e) = result {
        log::warn!("gallery {step} failed: {e}");
    }
}
