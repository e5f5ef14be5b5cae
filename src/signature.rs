//! Webhook signature generation and verification

use crate::config::Secret;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes and verifies base64-encoded HMAC-SHA256 signatures over raw
/// request bodies.
///
/// Verification is a pure function of the body, the supplied signature, and
/// the configured secret. The body must be the exact byte sequence received
/// on the wire; any re-serialization before the MAC is computed invalidates
/// the signature.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: Secret,
}

impl SignatureVerifier {
    /// Create a new verifier with the given secret
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Generate the platform-format signature for a payload:
    /// `base64(hmac_sha256(secret, payload))`.
    pub fn sign(&self, payload: &[u8]) -> String {
        STANDARD.encode(self.compute_mac(payload))
    }

    /// Verify a supplied signature against the payload.
    ///
    /// Fails closed: an empty signature is always invalid. Malformed input
    /// never errors, it simply does not verify. Comparison is constant-time
    /// over the encoded digests; unequal lengths are immediately unequal.
    pub fn verify(&self, payload: &[u8], supplied: &str) -> bool {
        if supplied.is_empty() {
            return false;
        }
        let expected = self.sign(payload);
        constant_time_compare(expected.as_bytes(), supplied.as_bytes())
    }

    /// Decode an encoded signature back to raw digest bytes.
    ///
    /// Returns `None` if the input is not valid base64.
    pub fn decode(signature: &str) -> Option<Vec<u8>> {
        STANDARD.decode(signature).ok()
    }

    fn compute_mac(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take any size key");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Constant-time byte comparison to prevent timing attacks
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
