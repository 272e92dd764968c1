mod device;
pub mod dispatch;
mod form;
mod gate;
mod ui;

use crux_core::{render::render, Command};

use crate::config::PanelConfig;
use crate::events::Event;
use crate::model::Model;
use crate::types::catalog;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => {
            for form in catalog::device_forms() {
                model.register_form(form);
            }
            render()
        }

        Event::Configure { config } => match PanelConfig::from_json(&config) {
            Ok(config) => {
                model.config = config;
                render()
            }
            Err(e) => {
                log::error!("{e}");
                model.set_error_and_render(e)
            }
        },

        Event::Form(form_event) => form::handle(form_event, model),
        Event::Device(device_event) => device::handle(device_event, model),
        Event::Dispatch(dispatch_event) => dispatch::handle(dispatch_event, model),
        Event::Gate(gate_event) => gate::handle(gate_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
