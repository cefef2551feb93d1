//! Input result type

use serde::Serialize;

use crate::window::WindowId;

/// Result of routing a pointer event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Consumed by the window system (chrome click, drag)
    Handled,
    /// Nothing under the pointer / no drag in progress
    Unhandled,
    /// Click landed in a window's content; the panel should handle it
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Whether the window system consumed or redirected the event
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    /// Whether the event should go to window content
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
