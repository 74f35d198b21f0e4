//! Drag-to-pan gesture tracked between pointer-down and pointer-up.
//!
//! The gesture only starts while the viewport is magnified. It records the
//! offset between the pointer and the pan at pointer-down, so every move sets
//! `pan = pointer - origin` and the image stays pinned under the pointer.

use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the zoomed media.
    Dragging {
        /// Pointer position minus pan at pointer-down.
        origin: Point,
    },
}

impl DragGesture {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start dragging if the viewport can pan. Returns whether it started.
    pub fn begin(&mut self, pointer: Point, viewport: &Viewport) -> bool {
        if !viewport.can_pan() {
            return false;
        }
        *self = Self::Dragging { origin: pointer.minus(viewport.pan()) };
        true
    }

    /// Move the pan with the pointer. Returns whether the viewport changed.
    pub fn update(&self, pointer: Point, viewport: &mut Viewport) -> bool {
        match *self {
            Self::Idle => false,
            Self::Dragging { origin } => {
                viewport.set_pan(pointer.minus(origin));
                true
            }
        }
    }

    /// Finish the drag. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }
}
