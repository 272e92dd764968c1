//! Panel configuration
//!
//! Endpoints default to the routes served by the device firmware. The shell
//! may override them at startup with a JSON document (`Event::Configure`).

use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Endpoint configuration for device actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    #[validate(pattern = r"^/")]
    pub reboot_endpoint: String,
    #[validate(pattern = r"^/")]
    pub reset_endpoint: String,
    #[validate(pattern = r"^/")]
    pub socket_endpoint: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            reboot_endpoint: "/reboot".to_string(),
            reset_endpoint: "/reset".to_string(),
            socket_endpoint: "/ws".to_string(),
        }
    }
}

impl PanelConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid panel config: {e}"))?;
        config
            .validate()
            .map_err(|e| format!("Invalid panel config: {e}"))?;
        Ok(config)
    }
}
