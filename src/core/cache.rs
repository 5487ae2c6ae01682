//! Session response cache.
//!
//! Stores serialized API responses in a session-scoped [`KeyValueStore`],
//! stamped with their write time. Entries older than the TTL are evicted
//! lazily when read; there is no background sweep.
//!
//! Every operation fails soft: a storage or decode error is a cache miss
//! on read and a skipped write on write.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::config::{cache, endpoints};
use crate::core::clock::Clock;
use crate::core::storage::KeyValueStore;
use crate::utils::console;

// =============================================================================
// Cache Key
// =============================================================================

/// Deterministic storage key for one logical request.
///
/// Format: `{prefix}{endpoint}:{sha256(canonical params)}`. Parameters are
/// serialized with sorted field names, so the key does not depend on the
/// order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Build a key from an endpoint name and its request parameters.
    pub fn new(endpoint: &str, params: &[(&str, Value)]) -> Self {
        let canonical: BTreeMap<&str, &Value> =
            params.iter().map(|(name, value)| (*name, value)).collect();
        // A BTreeMap of JSON values always serializes.
        let json = serde_json::to_string(&canonical).unwrap_or_default();
        let digest = hex::encode(Sha256::digest(json.as_bytes()));
        Self(format!("{}{}:{}", cache::KEY_PREFIX, endpoint, digest))
    }

    /// Key for `POST /recommend`. The goal is trimmed. The preference only
    /// takes part when given, so plain goal lookups keep the same key.
    pub fn recommend(goal: &str, user_id: Option<&str>, preference: Option<&str>) -> Self {
        let mut params = vec![
            ("endpoint", Value::from(endpoints::RECOMMEND)),
            ("goal", Value::from(goal.trim())),
            ("user_id", user_id.map(Value::from).unwrap_or(Value::Null)),
        ];
        if let Some(preference) = preference {
            params.push(("preference", Value::from(preference.trim())));
        }
        Self::new(endpoints::RECOMMEND, &params)
    }

    /// Key for `POST /search-products`. The product name is trimmed and
    /// lower-cased, so "Lamp" and "lamp " share an entry.
    pub fn search(product_name: &str, max_results: u32) -> Self {
        Self::new(
            endpoints::SEARCH_PRODUCTS,
            &[
                ("endpoint", Value::from(endpoints::SEARCH_PRODUCTS)),
                ("product_name", Value::from(product_name.trim().to_lowercase())),
                ("max_results", Value::from(max_results)),
            ],
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Session Cache
// =============================================================================

/// Stored form of a cached payload.
#[derive(Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    written_at_millis: u64,
}

/// TTL cache over a session-scoped key-value store.
#[derive(Clone)]
pub struct SessionCache {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    ttl_millis: u64,
}

impl SessionCache {
    /// Create a cache with the default 24 hour TTL.
    pub fn new(store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            ttl_millis: cache::TTL_MILLIS,
        }
    }

    /// Get a cached value.
    ///
    /// Returns `None` if the key doesn't exist, storage fails, the entry
    /// can't be decoded, or it is older than the TTL. Undecodable and
    /// expired entries are removed.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let raw = match self.store.get_item(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                console::debug(&format!("cache read skipped: {}", e));
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                console::warn(&format!("dropping malformed cache entry {}: {}", key.as_str(), e));
                self.remove(key);
                return None;
            }
        };

        let age = self.clock.now_millis().saturating_sub(entry.written_at_millis);
        if age > self.ttl_millis {
            self.remove(key);
            return None;
        }

        Some(entry.data)
    }

    /// Store a value. Failures (quota, unavailable storage) are logged and ignored.
    pub fn set<T: Serialize>(&self, key: &CacheKey, data: &T) {
        let entry = CacheEntry {
            data,
            written_at_millis: self.clock.now_millis(),
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(e) => {
                console::warn(&format!("cache write skipped: {}", e));
                return;
            }
        };

        if let Err(e) = self.store.set_item(key.as_str(), &json) {
            console::warn(&format!("cache write skipped: {}", e));
        }
    }

    /// Remove one entry.
    pub fn remove(&self, key: &CacheKey) {
        let _ = self.store.remove_item(key.as_str());
    }

    /// Remove every entry this cache wrote, leaving other keys untouched.
    pub fn clear(&self) {
        let Ok(keys) = self.store.keys() else {
            return;
        };

        for key in keys.iter().filter(|k| k.starts_with(cache::KEY_PREFIX)) {
            let _ = self.store.remove_item(key);
        }
    }
}
