//! Webhook receiver for verifying inbound deliveries

use crate::config::ReceiverConfig;
use crate::event::EventContext;
use crate::headers::HeaderMap;
use crate::signature::SignatureVerifier;
use crate::{Result, WebhookError};

/// Verifies inbound webhook deliveries against the configured secret and
/// header names.
#[derive(Debug, Clone)]
pub struct WebhookReceiver {
    config: ReceiverConfig,
    verifier: SignatureVerifier,
}

impl WebhookReceiver {
    /// Create a receiver from a configuration
    pub fn new(config: ReceiverConfig) -> Self {
        let verifier = SignatureVerifier::new(config.secret.clone());
        Self { config, verifier }
    }

    /// The active configuration
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// The underlying signature verifier
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    /// Verify a supplied signature against the raw body
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        self.verifier.verify(payload, signature)
    }

    /// Verify the signature carried in the configured header.
    ///
    /// Fails closed: a missing header is treated the same as an invalid
    /// signature.
    pub fn verify_from_headers(&self, payload: &[u8], headers: &HeaderMap) -> bool {
        match headers.get(&self.config.signature_header) {
            Some(signature) => self.verifier.verify(payload, signature),
            None => false,
        }
    }

    /// Verify and parse an inbound delivery.
    ///
    /// The raw body is verified exactly as received, then parsed as JSON.
    /// The distinct missing/invalid error variants exist for logging only;
    /// both map to the same response status.
    pub fn receive(&self, payload: &[u8], headers: &HeaderMap) -> Result<serde_json::Value> {
        let signature = headers
            .get(&self.config.signature_header)
            .ok_or(WebhookError::SignatureMissing)?;

        if !self.verifier.verify(payload, signature) {
            return Err(WebhookError::SignatureInvalid);
        }

        serde_json::from_slice(payload).map_err(WebhookError::from)
    }

    /// Build the event context from the delivery headers.
    ///
    /// Returns `None` when the topic header is absent; an absent topic is a
    /// distinct state from a topic no subscriber recognizes.
    pub fn context_from_headers(&self, headers: &HeaderMap) -> Option<EventContext> {
        let topic = headers.get(&self.config.topic_header)?;

        let mut context = EventContext::new(topic);
        if let Some(domain) = headers.get(&self.config.shop_domain_header) {
            context = context.with_shop_domain(domain);
        }
        if let Some(id) = headers.get(&self.config.webhook_id_header) {
            context = context.with_webhook_id(id);
        }
        if let Some(test) = headers.get(&self.config.test_header) {
            context = context.with_test(test.eq_ignore_ascii_case("true"));
        }
        Some(context)
    }
}
