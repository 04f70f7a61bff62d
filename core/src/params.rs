use std::collections::btree_map;
use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::{Error, Result};

/// Ordered request parameter map.
///
/// Keys iterate in ascending lexicographic order, which is exactly the order
/// the signature algorithm consumes them in. Values are already-rendered
/// strings: whatever is stored here is what gets signed and what goes on the
/// wire, byte for byte.
#[derive(Debug, Clone, Default)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string-valued parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter rendered as compact JSON.
    ///
    /// The API takes list and object values (`taskIds`, `texts`, `images`,
    /// ...) as JSON strings inside the form body. Rendering happens once,
    /// here, so the signed string and the transmitted string cannot diverge.
    pub fn insert_json<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let rendered = serde_json::to_string(value)
            .map_err(|e| Error::request_invalid(format!("parameter is not valid JSON: {e}")))?;
        self.0.insert(key.into(), rendered);
        Ok(())
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    /// Whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Static description of one API operation.
///
/// URL, protocol version string, and timeout are fixed per endpoint; the
/// values live in each service crate's `constants` module.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Full request URL.
    pub url: &'static str,
    /// Protocol version tag sent as the `version` parameter.
    pub version: &'static str,
    /// Fixed per-request timeout.
    pub timeout: Duration,
    /// Whether the endpoint takes the `businessId` parameter.
    pub requires_business_id: bool,
}

impl Endpoint {
    /// Describe an endpoint that is bound to a business id.
    pub const fn new(url: &'static str, version: &'static str, timeout_secs: u64) -> Self {
        Self {
            url,
            version,
            timeout: Duration::from_secs(timeout_secs),
            requires_business_id: true,
        }
    }

    /// Describe an endpoint that takes no business id.
    pub const fn without_business_id(
        url: &'static str,
        version: &'static str,
        timeout_secs: u64,
    ) -> Self {
        Self {
            url,
            version,
            timeout: Duration::from_secs(timeout_secs),
            requires_business_id: false,
        }
    }
}
