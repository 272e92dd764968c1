//! Gate socket command definitions.
//!
//! The Shell owns the WebSocket to the device. Frames received from the device
//! are sent to the Core directly as `GateEvent::Message`.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocketOperation {
    Connect { url: String },
    Disconnect,
    Send { text: String },
}

// What the Shell reports back for an operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocketOutput {
    Connected,
    Disconnected,
    Sent,
    Error { message: String },
}

impl Operation for SocketOperation {
    type Output = SocketOutput;
}

/// Command-based socket API
pub struct Socket<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Socket<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SocketOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn connect(url: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SocketOperation::Connect { url: url.into() })
    }

    pub fn disconnect() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SocketOperation::Disconnect)
    }

    pub fn send(text: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(SocketOperation::Send { text: text.into() })
    }
}

#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: SocketOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<SocketOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: SocketOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = SocketOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
