//! Geometry value types shared by windows and the manager
//!
//! Coordinates are expressed in the parent panel's local space: the origin is
//! the parent's top-left corner and `y` grows downward.

mod vec2;
mod size;
mod rect;
mod style;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
pub use style::{FrameStyle, FRAME_STYLE};
