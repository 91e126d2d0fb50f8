use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Could not connect to cache: {0}")]
    ConnectionError(String),
    #[error("Cache operation failed: {0}")]
    OperationError(String),
}

/// The key-value contract backing the cache-aside read path.
///
/// Values are opaque strings; callers own serialization. Entries stored with [`OrderCache::store_with_expiry`] must
/// not be observable after their time-to-live has elapsed.
#[allow(async_fn_in_trait)]
pub trait OrderCache {
    async fn fetch(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn store_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;

    async fn invalidate(&self, key: &str) -> Result<(), CacheError>;
}
