use crux_core::Command;

use crate::device_action;
use crate::events::{DeviceEvent, Event};
use crate::model::Model;
use crate::Effect;

/// Handle fixed device actions (reboot, reset)
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::Reboot { button } => device_action!(model, button, reboot_endpoint, "Reboot"),
        DeviceEvent::Reset { button } => device_action!(model, button, reset_endpoint, "Reset"),
    }
}
