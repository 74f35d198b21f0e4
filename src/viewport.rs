//! Zoom factor and pan offset applied to the rendered gallery media.

use crate::consts::{ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A pointer position or offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn minus(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Zoom/pan state for the media element.
///
/// `zoom` stays within `[ZOOM_MIN, ZOOM_MAX]` and moves in `ZOOM_STEP`
/// increments. `pan` is a translation in CSS pixels applied after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: ZOOM_DEFAULT, pan: Point::default() }
    }
}

impl Viewport {
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Whether the factor is exactly the neutral 1.0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_neutral(&self) -> bool {
        self.zoom == ZOOM_DEFAULT
    }

    /// Panning only makes sense while magnified.
    #[must_use]
    pub fn can_pan(&self) -> bool {
        self.zoom > ZOOM_DEFAULT
    }

    /// Step the zoom up, clamped to the maximum. Returns whether it changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom((self.zoom + ZOOM_STEP).min(ZOOM_MAX))
    }

    /// Step the zoom down, clamped to the minimum. Returns whether it changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom((self.zoom - ZOOM_STEP).max(ZOOM_MIN))
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Back to zoom 1.0 with no translation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// CSS `transform` value for the media element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.zoom, self.pan.x, self.pan.y)
    }

    #[allow(clippy::float_cmp)]
    fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }
}
