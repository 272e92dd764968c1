use serde::{Deserialize, Serialize};

pub const OPEN_COMMAND: &str = "open";
pub const CLOSE_NOTICE: &str = "close";

/// Relay position as last reported by the device
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelayState {
    #[default]
    Unknown,
    Open,
    Closed,
}
