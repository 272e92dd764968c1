use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a dispatched request ended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    HttpError { status: u16, body: String },
    NetworkError(String),
}

/// Failed request, formatted the way it is shown to the user
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Network Error: {0}")]
    Network(String),
}

impl RequestOutcome {
    /// Classify a fully read response by its status code
    pub fn from_parts(status: u16, body: String) -> Self {
        if (200..300).contains(&status) {
            Self::Success(body)
        } else {
            Self::HttpError { status, body }
        }
    }

    /// Map the result of an HTTP command. Any response is read to text first,
    /// only transport failures become `NetworkError`.
    ///
    /// `crux_http` hands non-2xx responses back as `HttpError::Http`, which
    /// still carries the status and body.
    pub fn from_http(result: crux_http::Result<crux_http::Response<Vec<u8>>>) -> Self {
        match result {
            Ok(mut response) => {
                let status = u16::from(response.status());
                Self::from_parts(status, body_text(response.take_body()))
            }
            Err(crux_http::HttpError::Http { code, body, .. }) => {
                Self::from_parts(u16::from(code), body_text(body))
            }
            Err(e) => Self::NetworkError(e.to_string()),
        }
    }

    pub fn into_result(self) -> Result<String, DispatchError> {
        match self {
            Self::Success(body) => Ok(body),
            Self::HttpError { status, body } => Err(DispatchError::Http { status, body }),
            Self::NetworkError(message) => Err(DispatchError::Network(message)),
        }
    }
}

fn body_text(body: Option<Vec<u8>>) -> String {
    body.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
