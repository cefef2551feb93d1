//! Window configuration for creation

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use super::WindowId;

/// Configuration for creating a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Registry key
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Initial position in parent space
    pub position: Vec2,
    /// Initial size (clamped to the size constraints)
    pub size: Size,
    /// Minimum size constraint
    pub min_size: Size,
    /// Maximum size constraint
    pub max_size: Size,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub closable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: WindowId::default(),
            title: "Window".to_string(),
            position: Vec2::ZERO,
            size: Size::new(640.0, 480.0),
            min_size: Size::new(400.0, 300.0),
            max_size: Size::new(1920.0, 1080.0),
            resizable: true,
            minimizable: true,
            maximizable: true,
            closable: true,
        }
    }
}

impl WindowConfig {
    /// Default configuration for the given id
    pub fn new(id: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Creation-time constraints carried by the window
    pub fn constraints(&self) -> WindowConstraints {
        WindowConstraints {
            min_size: self.min_size,
            max_size: self.max_size,
            resizable: self.resizable,
            minimizable: self.minimizable,
            maximizable: self.maximizable,
            closable: self.closable,
        }
    }
}

/// Constraints fixed when a window is created
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WindowConstraints {
    pub min_size: Size,
    pub max_size: Size,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub closable: bool,
}
