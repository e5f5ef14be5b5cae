//! Error types for webhook handling

use thiserror::Error;

/// Errors that can occur while handling an inbound webhook
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Request used a method other than POST
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request body was empty
    #[error("empty request body")]
    EmptyBody,

    /// Signature header missing from request
    #[error("signature header missing")]
    SignatureMissing,

    /// Signature verification failed
    #[error("signature verification failed")]
    SignatureInvalid,

    /// Payload deserialization failed after verification
    #[error("payload error: {0}")]
    Payload(String),
}

impl WebhookError {
    /// Map the error to its HTTP status code.
    ///
    /// Both signature failure modes map to 403 so the response never reveals
    /// whether the header was absent or merely wrong.
    pub fn status(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::EmptyBody | Self::Payload(_) => 400,
            Self::SignatureMissing | Self::SignatureInvalid => 403,
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::Payload(err.to_string())
    }
}
