use std::env;

use log::{info, trace};
use redis::{aio::ConnectionManager, AsyncCommands, Client};

use crate::traits::{CacheError, OrderCache};

const REDIS_URL: &str = "redis://127.0.0.1:6379";

pub fn cache_url() -> String {
    let result = env::var("SOS_REDIS_URL").unwrap_or_else(|_| {
        info!("SOS_REDIS_URL is not set. Using the default.");
        REDIS_URL.to_string()
    });
    info!("Using cache URL: {result}");
    result
}

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() {
            CacheError::ConnectionError(e.to_string())
        } else {
            CacheError::OperationError(e.to_string())
        }
    }
}

/// The production [`OrderCache`] implementation, backed by Redis.
///
/// The connection manager multiplexes all requests over a single connection and reconnects on failure, so the cache
/// object is cheap to clone into every actix worker.
#[derive(Clone)]
pub struct RedisOrderCache {
    url: String,
    manager: ConnectionManager,
}

impl RedisOrderCache {
    pub async fn new_with_url(url: &str) -> Result<Self, CacheError> {
        let client = Client::open(url).map_err(|e| CacheError::ConnectionError(e.to_string()))?;
        let manager = client.get_connection_manager().await?;
        info!("🗂️ Connected to order cache at {url}");
        Ok(Self { url: url.to_string(), manager })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl OrderCache for RedisOrderCache {
    async fn fetch(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;
        trace!("🗂️ GET {key}: {}", if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn store_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await?;
        trace!("🗂️ SETEX {key} ({ttl_seconds}s)");
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(key).await?;
        trace!("🗂️ DEL {key}");
        Ok(())
    }
}
