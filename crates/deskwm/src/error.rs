//! Error types for window management and configuration

use thiserror::Error;

use crate::window::WindowId;

/// Errors surfaced by [`WindowManager`](crate::WindowManager) operations.
///
/// Guard rejections (minimizing an already minimized window, closing a
/// non-closable one, ...) are not errors; they are silent no-ops.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The id was never registered (or has been unregistered)
    #[error("window not registered: {0}")]
    NotFound(WindowId),
}

/// Errors produced while loading a [`DesktopConfig`](crate::DesktopConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type
    #[error("invalid desktop configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A window entry has an empty id
    #[error("window at index {index} has no id")]
    MissingWindowId { index: usize },

    /// A window id appears more than once
    #[error("window id declared twice: {0}")]
    DuplicateWindowId(WindowId),

    /// Z-order must strictly increase on every raise
    #[error("z-order step must be positive, got {0}")]
    InvalidZOrderStep(i32),
}
