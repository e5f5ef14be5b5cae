//! Webhook receiving for storefront platform integrations
//!
//! This crate verifies inbound webhook notifications from the storefront
//! platform and dispatches them to in-process subscribers keyed by event
//! topic.
//!
//! # Features
//!
//! - **Signature Verification**: HMAC-SHA256 over the raw request body,
//!   base64-encoded, compared in constant time
//! - **Topic Dispatch**: synchronous fan-out to subscribers in registration
//!   order, with per-subscriber error isolation
//! - **Response Contract**: the full 405 / 400 / 403 / 200 ladder behind a
//!   single framework-independent entry point
//!
//! # Example: Verifying a Delivery
//!
//! ```rust
//! use storefront_webhooks::{ReceiverConfig, SignatureVerifier, WebhookReceiver};
//!
//! let receiver = WebhookReceiver::new(ReceiverConfig::new("shared-secret"));
//!
//! let body = br#"{"id": 123}"#;
//! let signature = SignatureVerifier::new("shared-secret").sign(body);
//!
//! assert!(receiver.verify(body, &signature));
//! ```
//!
//! # Example: Subscribing to a Topic
//!
//! ```rust
//! use storefront_webhooks::{topics, Dispatcher, EventContext, SubscriberError};
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.register(
//!     topics::ORDERS_CREATE,
//!     |context: &EventContext, payload: &serde_json::Value| -> Result<(), SubscriberError> {
//!         println!("order {} created on {:?}", payload["id"], context.shop_domain);
//!         Ok(())
//!     },
//! );
//! ```
//!
//! # Example: Handling a Request
//!
//! ```rust
//! use storefront_webhooks::{
//!     Dispatcher, ReceiverConfig, WebhookEndpoint, WebhookReceiver, WebhookRequest,
//! };
//!
//! let endpoint = WebhookEndpoint::new(
//!     WebhookReceiver::new(ReceiverConfig::new("shared-secret")),
//!     Dispatcher::new(),
//! );
//!
//! // Whatever serves HTTP hands over method, headers, and the raw body.
//! let request = WebhookRequest::new("GET");
//! assert_eq!(endpoint.handle(&request).status, 405);
//! ```

mod config;
mod dispatcher;
mod endpoint;
mod error;
mod event;
mod http;
mod receiver;
mod signature;

pub mod headers;
pub mod topics;

pub use config::{ReceiverConfig, ReceiverConfigBuilder, Secret};
pub use dispatcher::Dispatcher;
pub use endpoint::WebhookEndpoint;
pub use error::WebhookError;
pub use event::{EventContext, Subscriber, SubscriberError};
pub use headers::HeaderMap;
pub use http::{WebhookRequest, WebhookResponse};
pub use receiver::WebhookReceiver;
pub use signature::SignatureVerifier;

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
