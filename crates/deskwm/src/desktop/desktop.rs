//! Desktop struct: startup, launching and the command queue

use tracing::{debug, info, warn};

use crate::command::{CommandQueue, CommandSender, WindowCommand};
use crate::config::DesktopConfig;
use crate::error::WindowError;
use crate::services::{Collaborators, SoundKind};
use crate::window::{Window, WindowConfig, WindowManager};

/// Per-screen controller owning the window manager
///
/// Startup is two-phase: [`Desktop::new`] builds every configured window,
/// [`Desktop::start`] registers them with the manager. Nothing is visible
/// before `start`, and windows are only opened on request.
#[derive(Debug)]
pub struct Desktop {
    pub(super) manager: WindowManager,
    services: Collaborators,
    /// Windows built before `start`, in configuration order
    pending: Vec<Window>,
    commands: CommandQueue,
    started: bool,
}

impl Desktop {
    /// Build the windows described by `config`, sharing `services`
    pub fn new(config: DesktopConfig, services: Collaborators) -> Self {
        let pending = config
            .windows
            .into_iter()
            .map(|window| Window::new(window, services.clone()))
            .collect();

        Self {
            manager: WindowManager::new(config.manager),
            services,
            pending,
            commands: CommandQueue::new(),
            started: false,
        }
    }

    /// Register the configured windows. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }

        for window in self.pending.drain(..) {
            self.manager.register(window);
        }
        self.started = true;
        info!(windows = self.manager.len(), "desktop started");
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    #[inline]
    pub fn manager_mut(&mut self) -> &mut WindowManager {
        &mut self.manager
    }

    /// Build one more window. Before `start` it waits with the configured
    /// ones. Returns `false` if the id is already taken.
    pub fn add_window(&mut self, config: WindowConfig) -> bool {
        let taken = self.manager.get(config.id.as_str()).is_some()
            || self.pending.iter().any(|w| w.id() == &config.id);
        if taken {
            debug!(window = %config.id, "window id already taken");
            return false;
        }

        let window = Window::new(config, self.services.clone());
        if self.started {
            self.manager.register(window)
        } else {
            self.pending.push(window);
            true
        }
    }

    /// Open a window from its desktop icon: click feedback, then open
    /// (or raise, if already open)
    ///
    /// Unknown ids get no click, only the not-found error.
    pub fn launch(&mut self, id: &str) -> Result<(), WindowError> {
        if self.manager.get(id).is_some() {
            self.services.play(SoundKind::Click);
        }
        self.manager.open(id)
    }

    // ---------------------------------------------------------------------
    // Command queue
    // ---------------------------------------------------------------------

    /// Handle for queueing commands from other threads or from listeners
    pub fn command_sender(&self) -> CommandSender {
        self.commands.sender()
    }

    /// Apply one command immediately
    pub fn apply(&mut self, command: WindowCommand) -> Result<(), WindowError> {
        let manager = &mut self.manager;
        match command {
            WindowCommand::Open { window_id } => manager.open(window_id.as_str()),
            WindowCommand::Close { window_id } => manager.close(window_id.as_str()),
            WindowCommand::CloseAll => {
                manager.close_all();
                Ok(())
            }
            WindowCommand::BringToFront { window_id } => manager.bring_to_front(window_id.as_str()),
            WindowCommand::SendToBack { window_id } => manager.send_to_back(window_id.as_str()),
            WindowCommand::Minimize { window_id } => manager.minimize(window_id.as_str()),
            WindowCommand::Maximize { window_id } => manager.maximize(window_id.as_str()),
            WindowCommand::Restore { window_id } => manager.restore(window_id.as_str()),
            WindowCommand::ToggleMaximize { window_id } => manager.toggle_maximize(window_id.as_str()),
        }
    }

    /// Apply every command queued so far, in arrival order, and return how
    /// many were applied. Commands queued while pumping wait for the next
    /// call.
    pub fn pump(&mut self) -> usize {
        let commands = self.commands.drain();
        let count = commands.len();
        for command in commands {
            if let Err(err) = self.apply(command) {
                warn!(%err, "queued command failed");
            }
        }
        count
    }
}
