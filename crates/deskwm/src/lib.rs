//! Window management for a single-screen desktop shell
//!
//! This crate provides the windowing core of a desktop environment:
//! - Window state machine (closed, normal, minimized, maximized)
//! - Registry, z-order assignment and single-focus arbitration
//! - Title-bar dragging, chrome buttons and hit testing
//! - Lifecycle notifications and audio feedback through injected collaborators
//! - A command queue for requesting window operations from other threads
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry value types (`Vec2`, `Size`, `Rect`) and frame metrics
//! - [`window`]: `Window` state machine and the `WindowManager`
//! - [`services`]: Collaborator contracts (audio, parent bounds)
//! - [`events`]: `WindowEvent` notifications and the `EventBus`
//! - [`input`]: Drag state and pointer routing results
//! - [`command`]: Deferred `WindowCommand`s
//! - [`desktop`]: The per-screen `Desktop` controller
//! - [`config`]: JSON-loadable configuration
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use deskwm::{Collaborators, Desktop, DesktopConfig, EventBus, Rect, WindowEventKind};
//!
//! let bus = Rc::new(EventBus::new());
//! bus.subscribe(WindowEventKind::Opened, |event| {
//!     println!("opened {}", event.window_id());
//!     Ok(())
//! });
//!
//! let services = Collaborators::new()
//!     .with_events(bus.clone())
//!     .with_bounds(Rc::new(Rect::new(0.0, 0.0, 1920.0, 1040.0)));
//!
//! let config = DesktopConfig::from_json(r#"{ "windows": [ { "id": "browser" }, { "id": "terminal" } ] }"#)?;
//! let mut desktop = Desktop::new(config, services);
//! desktop.start();
//!
//! desktop.launch("browser")?;
//! desktop.launch("terminal")?;
//! assert_eq!(desktop.manager().focused().map(|w| w.id().as_str()), Some("terminal"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod command;
pub mod config;
pub mod desktop;
pub mod error;
pub mod events;
pub mod input;
pub mod math;
pub mod services;
pub mod window;

#[cfg(test)]
mod test_utils;

// Re-export core types for convenience
pub use command::{CommandSender, WindowCommand};
pub use config::{DesktopConfig, ManagerConfig};
pub use desktop::Desktop;
pub use error::{ConfigError, WindowError};
pub use events::{EventBus, EventSink, Listener, SubscriptionId, WindowEvent, WindowEventKind};
pub use input::{DragState, InputResult};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use services::{AudioSink, BoundsProvider, Collaborators, SoundKind};
pub use window::{Window, WindowConfig, WindowConstraints, WindowId, WindowManager, WindowRegion, WindowState};
