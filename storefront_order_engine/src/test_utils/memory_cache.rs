use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::traits::{CacheError, OrderCache};

/// A recording in-memory [`OrderCache`] double.
///
/// Stores entries in a map and remembers the TTL each entry was written with, so tests can assert on the exact
/// arguments the cache-aside path produced. Entries never actually expire.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, (String, u64)>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored (value, ttl) pair for `key`, if any.
    pub fn entry(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Seed the cache directly, bypassing the trait, to simulate a warm cache.
    pub fn prime(&self, key: &str, value: &str, ttl_seconds: u64) {
        self.entries.lock().unwrap().insert(key.to_string(), (value.to_string(), ttl_seconds));
    }
}

impl OrderCache for MemoryCache {
    async fn fetch(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone()))
    }

    async fn store_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.entries.lock().unwrap().insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
