//! Desktop configuration
//!
//! Every field has a default, so a configuration file only needs to list
//! what differs:
//!
//! ```json
//! {
//!   "manager": { "base_z_order": 100, "z_order_step": 10 },
//!   "windows": [
//!     { "id": "browser", "title": "Browser", "position": { "x": 80.0, "y": 60.0 } },
//!     { "id": "terminal", "closable": false }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::window::WindowConfig;

/// Stacking-order settings for a [`WindowManager`](crate::WindowManager)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Seed of the z-order counter and the value `send_to_back` assigns
    pub base_z_order: i32,
    /// Amount the counter grows on every open / raise
    pub z_order_step: i32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            base_z_order: 100,
            z_order_step: 10,
        }
    }
}

/// Full per-screen configuration: manager settings plus the windows to
/// build at startup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub manager: ManagerConfig,
    pub windows: Vec<WindowConfig>,
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manager.z_order_step <= 0 {
            return Err(ConfigError::InvalidZOrderStep(self.manager.z_order_step));
        }

        let mut seen = HashSet::new();
        for (index, window) in self.windows.iter().enumerate() {
            if window.id.as_str().is_empty() {
                return Err(ConfigError::MissingWindowId { index });
            }
            if !seen.insert(&window.id) {
                return Err(ConfigError::DuplicateWindowId(window.id.clone()));
            }
        }
        Ok(())
    }
}
