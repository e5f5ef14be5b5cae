//! Event context and subscriber traits

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Context handed to every subscriber alongside the parsed payload.
///
/// Carries the originating topic plus the pass-through metadata the platform
/// sends with each delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventContext {
    /// The topic that routed this event (e.g. "orders/create")
    pub topic: String,

    /// Domain of the shop that triggered the delivery, if sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_domain: Option<String>,

    /// Unique delivery id, if sent. Redeliveries reuse the same id, so
    /// subscribers that need exactly-once semantics can dedup on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,

    /// Whether the delivery came from the platform's test console
    #[serde(default)]
    pub test: bool,
}

impl EventContext {
    /// Create a context for the given topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            shop_domain: None,
            webhook_id: None,
            test: false,
        }
    }

    /// Set the originating shop domain
    pub fn with_shop_domain(mut self, domain: impl Into<String>) -> Self {
        self.shop_domain = Some(domain.into());
        self
    }

    /// Set the delivery id
    pub fn with_webhook_id(mut self, id: impl Into<String>) -> Self {
        self.webhook_id = Some(id.into());
        self
    }

    /// Flag the delivery as a test delivery
    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }
}

/// Error returned by a failing subscriber
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("subscriber failed: {0}")]
    Failed(String),
}

impl SubscriberError {
    /// Shorthand for a failure with a message
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A callback invoked when a matching topic is dispatched.
///
/// Subscribers run synchronously, in registration order, on the thread
/// serving the request. A returned error is logged by the dispatcher and
/// isolated from the other subscribers for the topic.
pub trait Subscriber: Send + Sync {
    /// Handle a dispatched event
    fn on_event(
        &self,
        context: &EventContext,
        payload: &serde_json::Value,
    ) -> Result<(), SubscriberError>;
}

/// Plain functions and closures are subscribers.
impl<F> Subscriber for F
where
    F: Fn(&EventContext, &serde_json::Value) -> Result<(), SubscriberError> + Send + Sync,
{
    fn on_event(
        &self,
        context: &EventContext,
        payload: &serde_json::Value,
    ) -> Result<(), SubscriberError> {
        self(context, payload)
    }
}
