//! Drag gesture state

use serde::Serialize;

use crate::math::Vec2;

/// An in-progress title-bar drag
///
/// Exists only between pointer-down and pointer-up; closing, blurring,
/// minimizing or maximizing the window drops it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DragState {
    /// Window position minus the pointer position at pointer-down
    pub pointer_offset: Vec2,
}

impl DragState {
    /// Capture the offset between the window origin and the pointer
    #[inline]
    pub fn begin(window_position: Vec2, pointer: Vec2) -> Self {
        Self {
            pointer_offset: window_position - pointer,
        }
    }

    /// Window position that keeps the captured offset under `pointer`
    #[inline]
    pub fn position_for(&self, pointer: Vec2) -> Vec2 {
        pointer + self.pointer_offset
    }
}
