//! Pointer input types
//!
//! Hit testing and routing live on the [`WindowManager`](crate::WindowManager)
//! and [`Desktop`](crate::Desktop); this module holds the values they pass
//! around.

mod drag;
mod result;

pub use drag::DragState;
pub use result::InputResult;
