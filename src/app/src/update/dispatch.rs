//! Request dispatcher
//!
//! Every request goes through the same lifecycle: the button is marked busy in
//! the update that emits the HTTP effect, and released when the matching
//! [`DispatchEvent::Completed`] arrives, whatever the outcome. Success alerts
//! the response body and reloads the page afterwards, failures only alert.

use crux_core::{render::render, Command};

use crate::events::{DispatchEvent, Event, UiEvent};
use crate::http_helpers::{build_url, encode_multipart, url_with_query, MultipartBody};
use crate::model::Model;
use crate::types::{Form, FormMethod, RequestOutcome};
use crate::{Effect, HttpCmd, PageCmd};

/// Request as it will be handed to the HTTP effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub method: FormMethod,
    pub url: String,
    pub body: Option<MultipartBody>,
}

impl ActionRequest {
    /// Bodiless POST, used for device actions
    pub fn post(url: String) -> Self {
        Self {
            method: FormMethod::Post,
            url,
            body: None,
        }
    }

    /// Build the request a browser would send for `form`.
    ///
    /// POST forms carry their values as multipart body, GET forms in the query.
    pub fn for_form(form: &Form) -> Result<Self, String> {
        let url = build_url(&form.action);
        let fields = form.field_values();

        match form.method {
            FormMethod::Post => Ok(Self {
                method: FormMethod::Post,
                url,
                body: Some(encode_multipart(&fields)),
            }),
            FormMethod::Get => Ok(Self {
                method: FormMethod::Get,
                url: url_with_query(&url, &fields)?,
                body: None,
            }),
        }
    }
}

/// Send `form` with its current values, driving `button` around the request
pub fn submit_form(form: &Form, button: String, model: &mut Model) -> Command<Effect, Event> {
    match ActionRequest::for_form(form) {
        Ok(request) => {
            log::debug!("submitting form {} to {}", form.id, request.url);
            dispatch(model, button, request)
        }
        Err(e) => model.set_error_and_render(e),
    }
}

/// Mark `button` busy and issue `request`
pub fn dispatch(model: &mut Model, button: String, request: ActionRequest) -> Command<Effect, Event> {
    if model.is_button_busy(&button) {
        log::warn!("button {button} already has a request in flight");
        return Command::done();
    }

    model.set_button_busy(&button, true);

    let ActionRequest { method, url, body } = request;
    let builder = match method {
        FormMethod::Get => HttpCmd::get(url),
        FormMethod::Post => HttpCmd::post(url),
    };
    let builder = match body {
        // body first: setting it must not clobber the multipart content type
        Some(MultipartBody {
            content_type,
            bytes,
        }) => builder
            .body_bytes(bytes)
            .header("Content-Type", content_type),
        None => builder,
    };

    Command::all([
        render(),
        builder.build().then_send(move |result| {
            Event::Dispatch(DispatchEvent::Completed {
                button,
                outcome: RequestOutcome::from_http(result),
            })
        }),
    ])
}

pub fn handle(event: DispatchEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DispatchEvent::Completed { button, outcome } => handle_completed(button, outcome, model),
    }
}

/// Release the button and surface the outcome
pub fn handle_completed(
    button: String,
    outcome: RequestOutcome,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.set_button_busy(&button, false);

    match outcome.into_result() {
        Ok(body) => {
            model.set_success(body.clone());
            Command::all([
                render(),
                PageCmd::alert(body)
                    .build()
                    .then_send(|_| Event::Ui(UiEvent::AlertDismissed { reload: true })),
            ])
        }
        Err(e) => {
            let message = e.to_string();
            log::warn!("request from button {button} failed: {message}");
            model.set_error(message.clone());
            Command::all([
                render(),
                PageCmd::alert(message)
                    .build()
                    .then_send(|_| Event::Ui(UiEvent::AlertDismissed { reload: false })),
            ])
        }
    }
}
