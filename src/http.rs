// Framework-independent request and response wrappers

use crate::error::WebhookError;
use crate::headers::HeaderMap;
use serde::Deserialize;

/// An inbound webhook request.
///
/// The body is kept as the exact byte sequence received on the wire; it must
/// stay unparsed until signature verification has run against it.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    pub method: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl WebhookRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Set the raw body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Parse the request body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, WebhookError> {
        serde_json::from_slice(&self.body).map_err(WebhookError::from)
    }
}

/// The response produced for a webhook request.
///
/// The contract mandates only a status code; no response body is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
}

impl WebhookResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    pub fn ok() -> Self {
        Self::new(200)
    }

    pub fn bad_request() -> Self {
        Self::new(400)
    }

    pub fn forbidden() -> Self {
        Self::new(403)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(405)
    }

    /// Whether the request was accepted
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
