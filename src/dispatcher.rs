//! Topic-keyed event dispatch

use crate::event::{EventContext, Subscriber};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, warn};

/// Dispatcher for verified webhook events.
///
/// Maps a topic string to an ordered list of subscribers and invokes them
/// synchronously, in registration order, when the topic is dispatched.
/// Dispatching a topic with no subscribers is a silent no-op.
///
/// The dispatcher is an explicit instance, not ambient global state: build
/// one, register subscribers, and hand it to the endpoint. Cloning is cheap
/// and clones share the same subscriber table.
///
/// # Example
///
/// ```rust
/// use storefront_webhooks::{Dispatcher, EventContext};
///
/// let dispatcher = Dispatcher::new();
/// dispatcher.register("orders/create", |ctx: &EventContext, payload: &serde_json::Value| {
///     println!("order {} created for {}", payload["id"], ctx.topic);
///     Ok::<(), storefront_webhooks::SubscriberError>(())
/// });
///
/// let context = EventContext::new("orders/create");
/// let notified = dispatcher.dispatch(&context, &serde_json::json!({"id": 123}));
/// assert_eq!(notified, 1);
/// ```
#[derive(Clone, Default)]
pub struct Dispatcher {
    subscribers: Arc<RwLock<HashMap<String, Vec<Arc<dyn Subscriber>>>>>,
}

impl Dispatcher {
    /// Create a new dispatcher with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a subscriber for a topic.
    ///
    /// Appends to the ordered list for that topic; the same subscriber may be
    /// registered more than once and will be invoked once per registration.
    /// An empty topic is rejected.
    pub fn register(&self, topic: impl Into<String>, subscriber: impl Subscriber + 'static) {
        let topic = topic.into();
        if topic.is_empty() {
            warn!("Ignoring subscriber registration for empty topic");
            return;
        }

        let mut subscribers = self.subscribers.write().unwrap();
        subscribers
            .entry(topic.clone())
            .or_default()
            .push(Arc::new(subscriber));
        debug!("Subscribed handler for topic: {}", topic);
    }

    /// Dispatch an event to every subscriber registered for its topic.
    ///
    /// Subscribers run synchronously in registration order. A failing
    /// subscriber is logged and does not stop the remaining subscribers.
    /// Returns the number of subscribers invoked; zero when the topic has
    /// none registered.
    pub fn dispatch(&self, context: &EventContext, payload: &serde_json::Value) -> usize {
        let subscribers = {
            let table = self.subscribers.read().unwrap();
            match table.get(&context.topic) {
                Some(subscribers) => subscribers.clone(),
                None => {
                    debug!("No subscribers registered for topic: {}", context.topic);
                    return 0;
                }
            }
        };

        for subscriber in &subscribers {
            if let Err(e) = subscriber.on_event(context, payload) {
                error!("Subscriber failed for topic {}: {}", context.topic, e);
            }
        }

        subscribers.len()
    }

    /// Get the number of subscribers registered for a topic
    pub fn subscriber_count(&self, topic: &str) -> usize {
        let subscribers = self.subscribers.read().unwrap();
        subscribers.get(topic).map(|s| s.len()).unwrap_or(0)
    }

    /// Remove all subscribers for a topic
    pub fn unsubscribe(&self, topic: &str) {
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.remove(topic);
        debug!("Unsubscribed all handlers for topic: {}", topic);
    }

    /// Remove all subscribers
    pub fn clear(&self) {
        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.clear();
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.read().unwrap();
        let mut topics: Vec<_> = subscribers
            .iter()
            .map(|(topic, list)| (topic.as_str(), list.len()))
            .collect();
        topics.sort();
        f.debug_struct("Dispatcher").field("topics", &topics).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SubscriberError;
    use serde_json::json;
    use std::sync::Mutex;

    fn counting_subscriber(
        log: Arc<Mutex<Vec<&'static str>>>,
        name: &'static str,
    ) -> impl Subscriber + 'static {
        move |_: &EventContext, _: &serde_json::Value| -> Result<(), SubscriberError> {
            log.lock().unwrap().push(name);
            Ok(())
        }
    }

    #[test]
    fn test_register_and_dispatch() {
        let dispatcher = Dispatcher::new();
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();

        dispatcher.register(
            "orders/create",
            move |_: &EventContext, payload: &serde_json::Value| -> Result<(), SubscriberError> {
                *sink.lock().unwrap() = Some(payload.clone());
                Ok(())
            },
        );

        let context = EventContext::new("orders/create");
        let notified = dispatcher.dispatch(&context, &json!({"id": 123}));

        assert_eq!(notified, 1);
        assert_eq!(*received.lock().unwrap(), Some(json!({"id": 123})));
    }

    #[test]
    fn test_dispatch_without_subscribers_is_noop() {
        let dispatcher = Dispatcher::new();
        let context = EventContext::new("orders/delete");

        assert_eq!(dispatcher.dispatch(&context, &json!({})), 0);
    }

    #[test]
    fn test_registration_order_preserved() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher.register("orders/create", counting_subscriber(log.clone(), "a"));
        dispatcher.register("orders/create", counting_subscriber(log.clone(), "b"));
        dispatcher.register("orders/create", counting_subscriber(log.clone(), "c"));

        let context = EventContext::new("orders/create");
        dispatcher.dispatch(&context, &json!({}));

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_registration_invoked_per_registration() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher.register("orders/create", counting_subscriber(log.clone(), "a"));
        dispatcher.register("orders/create", counting_subscriber(log.clone(), "a"));

        let context = EventContext::new("orders/create");
        assert_eq!(dispatcher.dispatch(&context, &json!({})), 2);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failing_subscriber_does_not_block_others() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher.register(
            "orders/create",
            |_: &EventContext, _: &serde_json::Value| -> Result<(), SubscriberError> {
                Err(SubscriberError::failed("database unavailable"))
            },
        );
        dispatcher.register("orders/create", counting_subscriber(log.clone(), "after"));

        let context = EventContext::new("orders/create");
        let notified = dispatcher.dispatch(&context, &json!({}));

        assert_eq!(notified, 2);
        assert_eq!(*log.lock().unwrap(), vec!["after"]);
    }

    #[test]
    fn test_topics_are_isolated() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        dispatcher.register("orders/create", counting_subscriber(log.clone(), "create"));
        dispatcher.register("orders/delete", counting_subscriber(log.clone(), "delete"));

        dispatcher.dispatch(&EventContext::new("orders/create"), &json!({}));

        assert_eq!(*log.lock().unwrap(), vec!["create"]);
    }

    #[test]
    fn test_empty_topic_registration_is_rejected() {
        let dispatcher = Dispatcher::new();
        dispatcher.register(
            "",
            |_: &EventContext, _: &serde_json::Value| -> Result<(), SubscriberError> { Ok(()) },
        );

        assert_eq!(dispatcher.subscriber_count(""), 0);
    }

    #[test]
    fn test_subscriber_count_and_clear() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.subscriber_count("orders/create"), 0);

        dispatcher.register(
            "orders/create",
            |_: &EventContext, _: &serde_json::Value| -> Result<(), SubscriberError> { Ok(()) },
        );
        dispatcher.register(
            "orders/create",
            |_: &EventContext, _: &serde_json::Value| -> Result<(), SubscriberError> { Ok(()) },
        );
        assert_eq!(dispatcher.subscriber_count("orders/create"), 2);

        dispatcher.clear();
        assert_eq!(dispatcher.subscriber_count("orders/create"), 0);
    }

    #[test]
    fn test_redispatch_leaves_state_unchanged() {
        let dispatcher = Dispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        dispatcher.register("orders/create", counting_subscriber(log.clone(), "a"));

        let context = EventContext::new("orders/create");
        dispatcher.dispatch(&context, &json!({"id": 1}));
        dispatcher.dispatch(&context, &json!({"id": 1}));

        assert_eq!(dispatcher.subscriber_count("orders/create"), 1);
        assert_eq!(log.lock().unwrap().len(), 2);
    }
}
