//! Page command definitions.
//!
//! Blocking notifications and full page reloads are performed by the Shell.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations the Shell performs on the current page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageOperation {
    /// Show a blocking alert; resolves once the user dismissed it
    Alert { message: String },
    /// Re-fetch the current page from the device
    Reload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageOutput {
    Done,
}

impl Operation for PageOperation {
    type Output = PageOutput;
}

/// Command-based page API
pub struct Page<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Page<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PageOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn alert(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PageOperation::Alert {
            message: message.into(),
        })
    }

    pub fn reload() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(PageOperation::Reload)
    }
}

#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: PageOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<PageOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: PageOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = PageOutput>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
