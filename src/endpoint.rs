//! The webhook endpoint: verification feeding dispatch

use crate::dispatcher::Dispatcher;
use crate::error::WebhookError;
use crate::http::{WebhookRequest, WebhookResponse};
use crate::receiver::WebhookReceiver;
use tracing::{debug, info, warn};

/// The single HTTP entry point for platform deliveries.
///
/// Framework-independent: whatever serves HTTP hands the method, headers,
/// and raw body to [`handle`](WebhookEndpoint::handle) and writes back the
/// returned status. The response contract is a fixed ladder:
///
/// 1. method other than POST → 405
/// 2. zero-length body → 400 (checked before signature verification)
/// 3. missing or invalid signature → 403
/// 4. verified but unparseable JSON → 400
/// 5. verified and parsed → dispatch → 200
///
/// Dispatch runs before the response is finalized; subscriber failures are
/// isolated inside the dispatcher and never change an already-determined 200.
#[derive(Debug, Clone)]
pub struct WebhookEndpoint {
    receiver: WebhookReceiver,
    dispatcher: Dispatcher,
}

impl WebhookEndpoint {
    /// Build an endpoint from a receiver and a dispatcher
    pub fn new(receiver: WebhookReceiver, dispatcher: Dispatcher) -> Self {
        Self {
            receiver,
            dispatcher,
        }
    }

    /// The receiver backing this endpoint
    pub fn receiver(&self) -> &WebhookReceiver {
        &self.receiver
    }

    /// The dispatcher backing this endpoint
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle one inbound request and produce the response status.
    pub fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        if request.method != "POST" {
            return self.reject(WebhookError::MethodNotAllowed);
        }

        // An empty body is malformed regardless of signing.
        if request.body.is_empty() {
            return self.reject(WebhookError::EmptyBody);
        }

        let payload = match self.receiver.receive(&request.body, &request.headers) {
            Ok(payload) => payload,
            Err(err) => return self.reject(err),
        };

        match self.receiver.context_from_headers(&request.headers) {
            Some(context) => {
                let notified = self.dispatcher.dispatch(&context, &payload);
                info!(
                    "Accepted {} event, {} subscriber(s) notified",
                    context.topic, notified
                );
            }
            None => {
                debug!("Accepted event without topic header, nothing to dispatch");
            }
        }

        WebhookResponse::ok()
    }

    fn reject(&self, err: WebhookError) -> WebhookResponse {
        // The error Display strings carry no signature material.
        warn!("Rejected webhook delivery: {}", err);
        WebhookResponse::new(err.status())
    }
}
