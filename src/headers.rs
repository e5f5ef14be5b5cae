//! Header storage and platform header names
//!
//! Provides a compact, case-insensitive header map for inbound webhook
//! requests. Most webhook deliveries carry fewer than a dozen headers, so
//! they are stored inline on the stack and looked up with a linear scan.

use smallvec::SmallVec;
use std::fmt;

/// The topic header identifying the event kind (e.g. "orders/create")
pub const TOPIC: &str = "X-Storefront-Topic";

/// The signature header carrying the base64-encoded HMAC-SHA256 of the body
pub const SIGNATURE: &str = "X-Storefront-Hmac-SHA256";

/// The domain of the shop that triggered the delivery
pub const SHOP_DOMAIN: &str = "X-Storefront-Shop-Domain";

/// Unique identifier for the delivery, useful for subscriber-side dedup
pub const WEBHOOK_ID: &str = "X-Storefront-Webhook-Id";

/// Set to "true" on deliveries triggered from the platform's test console
pub const TEST: &str = "X-Storefront-Test";

/// Number of headers stored inline (on the stack) before spilling to the heap.
pub const INLINE_HEADERS: usize = 12;

/// A header name-value pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name (case-insensitive for lookup)
    pub name: String,
    /// Header value
    pub value: String,
}

impl Header {
    /// Create a new header
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check if name matches (case-insensitive)
    #[inline]
    pub fn name_eq(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A compact header map with case-insensitive lookup.
///
/// Stores up to [`INLINE_HEADERS`] headers inline, only allocating on the
/// heap if more are added.
///
/// # Example
///
/// ```rust
/// use storefront_webhooks::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("X-Storefront-Topic", "orders/create");
///
/// assert_eq!(headers.get("x-storefront-topic"), Some(&"orders/create".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct HeaderMap {
    inner: SmallVec<[Header; INLINE_HEADERS]>,
}

impl HeaderMap {
    /// Create a new empty header map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: SmallVec::new_const(),
        }
    }

    /// Get the number of headers.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get header value by name (case-insensitive).
    #[inline]
    pub fn get(&self, name: &str) -> Option<&String> {
        self.inner
            .iter()
            .find(|h| h.name_eq(name))
            .map(|h| &h.value)
    }

    /// Check if header exists (case-insensitive).
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.iter().any(|h| h.name_eq(name))
    }

    /// Insert a header, replacing any existing header with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.inner.iter_mut().find(|h| h.name_eq(&name)) {
            Some(existing) => existing.value = value,
            None => self.inner.push(Header::new(name, value)),
        }
    }

    /// Remove a header by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.inner.iter().position(|h| h.name_eq(name))?;
        Some(self.inner.remove(idx).value)
    }

    /// Iterate over all headers.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.inner.iter()
    }

    /// Check if storage is inline (no heap allocation).
    #[inline]
    pub fn is_inline(&self) -> bool {
        !self.inner.spilled()
    }
}

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
