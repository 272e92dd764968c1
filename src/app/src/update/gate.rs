use crux_core::{render::render, Command};

use crate::events::{Event, GateEvent};
use crate::model::Model;
use crate::types::{RelayState, CLOSE_NOTICE, OPEN_COMMAND};
use crate::update_field;
use crate::{Effect, SocketCmd, SocketOutput};

/// Handle gate relay events
pub fn handle(event: GateEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        GateEvent::Connect => SocketCmd::connect(model.config.socket_endpoint.clone())
            .build()
            .then_send(|output| Event::Gate(GateEvent::SocketResponse(output))),

        GateEvent::Disconnect => SocketCmd::disconnect()
            .build()
            .then_send(|output| Event::Gate(GateEvent::SocketResponse(output))),

        GateEvent::Open { button } => {
            if !model.is_connected {
                return model.set_error_and_render("Gate is not connected".to_string());
            }
            // the device ignores requests while a cycle is running
            if model.relay_state == RelayState::Open || model.gate_button.is_some() {
                log::warn!("relay cycle in progress, ignoring open request from {button}");
                return Command::done();
            }

            model.set_button_busy(&button, true);
            model.gate_button = Some(button);
            Command::all([
                render(),
                SocketCmd::send(OPEN_COMMAND)
                    .build()
                    .then_send(|output| Event::Gate(GateEvent::SocketResponse(output))),
            ])
        }

        GateEvent::Message(text) => match text.trim() {
            OPEN_COMMAND => update_field!(model.relay_state, RelayState::Open),
            CLOSE_NOTICE => {
                release_gate_button(model);
                model.relay_state = RelayState::Closed;
                render()
            }
            other => {
                log::warn!("unexpected gate message: {other}");
                Command::done()
            }
        },

        GateEvent::SocketResponse(output) => match output {
            SocketOutput::Connected => update_field!(model.is_connected, true),
            SocketOutput::Disconnected => {
                release_gate_button(model);
                model.is_connected = false;
                model.relay_state = RelayState::Unknown;
                render()
            }
            SocketOutput::Sent => Command::done(),
            SocketOutput::Error { message } => {
                release_gate_button(model);
                model.set_error_and_render(format!("Gate socket error: {message}"))
            }
        },
    }
}

fn release_gate_button(model: &mut Model) {
    if let Some(button) = model.gate_button.take() {
        model.set_button_busy(&button, false);
    }
}
