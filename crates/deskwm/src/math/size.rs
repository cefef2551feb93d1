//! 2D extent type

use serde::{Deserialize, Serialize};

/// Width and height of a window or region
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp each dimension into `[min, max]`.
    ///
    /// `min` wins when the bounds cross, so a misconfigured window never
    /// shrinks below its minimum.
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self::new(
            self.width.min(max.width).max(min.width),
            self.height.min(max.height).max(min.height),
        )
    }
}
