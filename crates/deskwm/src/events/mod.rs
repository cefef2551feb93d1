//! Window lifecycle notifications
//!
//! Windows announce their transitions through an [`EventSink`]. The
//! in-crate implementation is [`EventBus`], a per-kind observer list with
//! synchronous fan-out.

mod bus;

use serde::Serialize;

use crate::window::WindowId;

pub use bus::{EventBus, Listener, SubscriptionId};

/// A lifecycle notification published by a window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WindowEvent {
    Opened { window_id: WindowId, z_order: i32 },
    Closed { window_id: WindowId },
    Focused { window_id: WindowId },
    Blurred { window_id: WindowId },
    Minimized { window_id: WindowId },
    Maximized { window_id: WindowId },
    Restored { window_id: WindowId },
}

impl WindowEvent {
    /// Discriminant used to route the event to subscribers
    pub fn kind(&self) -> WindowEventKind {
        match self {
            WindowEvent::Opened { .. } => WindowEventKind::Opened,
            WindowEvent::Closed { .. } => WindowEventKind::Closed,
            WindowEvent::Focused { .. } => WindowEventKind::Focused,
            WindowEvent::Blurred { .. } => WindowEventKind::Blurred,
            WindowEvent::Minimized { .. } => WindowEventKind::Minimized,
            WindowEvent::Maximized { .. } => WindowEventKind::Maximized,
            WindowEvent::Restored { .. } => WindowEventKind::Restored,
        }
    }

    /// Window the event is about
    pub fn window_id(&self) -> &WindowId {
        match self {
            WindowEvent::Opened { window_id, .. }
            | WindowEvent::Closed { window_id }
            | WindowEvent::Focused { window_id }
            | WindowEvent::Blurred { window_id }
            | WindowEvent::Minimized { window_id }
            | WindowEvent::Maximized { window_id }
            | WindowEvent::Restored { window_id } => window_id,
        }
    }
}

/// Event kinds a listener can subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowEventKind {
    Opened,
    Closed,
    Focused,
    Blurred,
    Minimized,
    Maximized,
    Restored,
}

impl WindowEventKind {
    /// Every kind, in declaration order
    pub const ALL: [WindowEventKind; 7] = [
        WindowEventKind::Opened,
        WindowEventKind::Closed,
        WindowEventKind::Focused,
        WindowEventKind::Blurred,
        WindowEventKind::Minimized,
        WindowEventKind::Maximized,
        WindowEventKind::Restored,
    ];
}

/// Publish side of the notification channel
///
/// Delivery is synchronous and best effort: an implementation must not let
/// a failing listener escape back into the publishing window.
pub trait EventSink {
    fn publish(&self, event: &WindowEvent);
}
