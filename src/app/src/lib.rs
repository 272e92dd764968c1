pub mod commands;
pub mod config;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        page::{PageOperation, PageOutput},
        socket::{SocketOperation, SocketOutput},
    },
    config::PanelConfig,
    events::{DeviceEvent, DispatchEvent, Event, FormEvent, GateEvent, UiEvent},
    http_helpers::{build_url, encode_multipart, url_with_query, BASE_URL},
    model::Model,
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Page(PageOperation),
    Socket(SocketOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type PageCmd = crate::commands::page::Page<Effect, Event>;
pub type SocketCmd = crate::commands::socket::Socket<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
