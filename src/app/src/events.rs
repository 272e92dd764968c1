use serde::{Deserialize, Serialize};

use crate::commands::socket::SocketOutput;
use crate::types::{Form, RequestOutcome};

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Load the device's form catalog
    Initialize,
    /// Override endpoint configuration with a JSON document
    Configure {
        config: String,
    },
    Form(FormEvent),
    Device(DeviceEvent),
    Gate(GateEvent),
    Ui(UiEvent),
    #[serde(skip)]
    Dispatch(DispatchEvent),
}

/// Form validation and submission
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Add or replace a form scraped from the page markup
    Register { form: Form },
    /// Run a full validation pass without submitting
    Validate { form_id: String },
    /// The user edited the field in `row`
    FieldInput {
        form_id: String,
        row: usize,
        value: String,
    },
    /// Validate and, if valid, send the form
    Submit { form_id: String, button: String },
}

/// Fixed device actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Reboot { button: String },
    Reset { button: String },
}

/// Completion of a dispatched request (internal)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Completed {
        button: String,
        outcome: RequestOutcome,
    },
}

/// Gate relay control over the device socket
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GateEvent {
    Connect,
    Disconnect,
    Open { button: String },
    /// Text frame received from the device
    Message(String),
    #[serde(skip)]
    SocketResponse(SocketOutput),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
    AlertDismissed { reload: bool },
    Reloaded,
}
