//! Deferred window commands
//!
//! Windows and the manager live on the UI thread. Work running elsewhere
//! (a background task, an event listener that must not re-enter the
//! manager) asks for window operations by sending a [`WindowCommand`]
//! through a [`CommandSender`]. The [`Desktop`](crate::Desktop) applies the
//! queued commands in arrival order on its next
//! [`pump`](crate::Desktop::pump).

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::window::WindowId;

/// A single window-manager operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WindowCommand {
    Open { window_id: WindowId },
    Close { window_id: WindowId },
    CloseAll,
    BringToFront { window_id: WindowId },
    SendToBack { window_id: WindowId },
    Minimize { window_id: WindowId },
    Maximize { window_id: WindowId },
    Restore { window_id: WindowId },
    ToggleMaximize { window_id: WindowId },
}

impl WindowCommand {
    /// Target window, `None` for [`WindowCommand::CloseAll`]
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            WindowCommand::CloseAll => None,
            WindowCommand::Open { window_id }
            | WindowCommand::Close { window_id }
            | WindowCommand::BringToFront { window_id }
            | WindowCommand::SendToBack { window_id }
            | WindowCommand::Minimize { window_id }
            | WindowCommand::Maximize { window_id }
            | WindowCommand::Restore { window_id }
            | WindowCommand::ToggleMaximize { window_id } => Some(window_id),
        }
    }
}

/// Cloneable, `Send` handle for queueing commands
#[derive(Clone, Debug)]
pub struct CommandSender {
    sender: Sender<WindowCommand>,
}

impl CommandSender {
    /// Queue a command. Returns `false` once the desktop has been dropped.
    pub fn send(&self, command: WindowCommand) -> bool {
        trace!(?command, "command queued");
        self.sender.send(command).is_ok()
    }
}

/// Receiving end, owned by the desktop
#[derive(Debug)]
pub(crate) struct CommandQueue {
    sender: Sender<WindowCommand>,
    receiver: Receiver<WindowCommand>,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub(crate) fn sender(&self) -> CommandSender {
        CommandSender { sender: self.sender.clone() }
    }

    /// Take everything queued so far, oldest first
    pub(crate) fn drain(&self) -> Vec<WindowCommand> {
        self.receiver.try_iter().collect()
    }
}
