//! Window management module
//!
//! [`Window`] owns one panel's state machine, geometry and drag gesture;
//! [`WindowManager`] owns the registry, the open stack, z-order assignment
//! and focus arbitration.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod id;
mod region;
mod manager;

pub use window::{Window, WindowState};
pub use config::{WindowConfig, WindowConstraints};
pub use id::WindowId;
pub use region::WindowRegion;
pub use manager::WindowManager;
