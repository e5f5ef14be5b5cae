//! Receiver configuration

use crate::headers;
use std::fmt;

/// Shared signing secret.
///
/// Loaded once at startup and immutable thereafter. The bytes are opaque to
/// this crate and are never logged; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Create a secret from raw bytes or a string.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw secret bytes, for MAC computation only.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(*redacted*)")
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Configuration for the webhook receiver
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// Shared secret used for signature verification
    pub secret: Secret,

    /// Header carrying the event topic
    pub topic_header: String,

    /// Header carrying the base64-encoded HMAC-SHA256 signature
    pub signature_header: String,

    /// Header carrying the originating shop domain
    pub shop_domain_header: String,

    /// Header carrying the unique delivery id
    pub webhook_id_header: String,

    /// Header flagging test-console deliveries
    pub test_header: String,
}

impl ReceiverConfig {
    /// Create a configuration with the platform's default header names.
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: secret.into(),
            topic_header: headers::TOPIC.to_string(),
            signature_header: headers::SIGNATURE.to_string(),
            shop_domain_header: headers::SHOP_DOMAIN.to_string(),
            webhook_id_header: headers::WEBHOOK_ID.to_string(),
            test_header: headers::TEST.to_string(),
        }
    }

    /// Create a builder for custom header names
    pub fn builder(secret: impl Into<Secret>) -> ReceiverConfigBuilder {
        ReceiverConfigBuilder::new(secret)
    }
}

/// Builder for ReceiverConfig
#[derive(Debug, Clone)]
pub struct ReceiverConfigBuilder {
    config: ReceiverConfig,
}

impl ReceiverConfigBuilder {
    /// Create a new builder with default header names
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            config: ReceiverConfig::new(secret),
        }
    }

    /// Set the topic header name
    pub fn topic_header(mut self, name: impl Into<String>) -> Self {
        self.config.topic_header = name.into();
        self
    }

    /// Set the signature header name
    pub fn signature_header(mut self, name: impl Into<String>) -> Self {
        self.config.signature_header = name.into();
        self
    }

    /// Set the shop domain header name
    pub fn shop_domain_header(mut self, name: impl Into<String>) -> Self {
        self.config.shop_domain_header = name.into();
        self
    }

    /// Set the delivery id header name
    pub fn webhook_id_header(mut self, name: impl Into<String>) -> Self {
        self.config.webhook_id_header = name.into();
        self
    }

    /// Set the test-delivery header name
    pub fn test_header(mut self, name: impl Into<String>) -> Self {
        self.config.test_header = name.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReceiverConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReceiverConfig::new("test-secret");
        assert_eq!(config.topic_header, headers::TOPIC);
        assert_eq!(config.signature_header, headers::SIGNATURE);
        assert_eq!(config.secret.as_bytes(), b"test-secret");
    }

    #[test]
    fn test_builder() {
        let config = ReceiverConfig::builder("test-secret")
            .topic_header("X-Event-Topic")
            .signature_header("X-Event-Signature")
            .build();

        assert_eq!(config.topic_header, "X-Event-Topic");
        assert_eq!(config.signature_header, "X-Event-Signature");
        assert_eq!(config.shop_domain_header, headers::SHOP_DOMAIN);
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::new("hunter2");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("hunter2"));

        let config = ReceiverConfig::new("hunter2");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
