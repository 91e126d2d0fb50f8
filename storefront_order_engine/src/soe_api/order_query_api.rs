use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{Order, OrderId},
    soe_api::OrderFlowError,
    traits::{OrderCache, OrderManagement},
};

/// The cache key under which the serialized order list is stored.
pub const ORDERS_CACHE_KEY: &str = "orders";

/// `OrderQueryApi` serves the read path: the order list (through the cache) and single-order lookups (straight from
/// the database).
///
/// The list read is cache-aside: check the cache, fall back to the database on a miss, then repopulate the cache with
/// the configured TTL. Cache failures degrade to a database read; they are logged but never surfaced to the caller.
pub struct OrderQueryApi<B, C> {
    db: B,
    cache: C,
    cache_ttl_seconds: u64,
}

impl<B, C> Debug for OrderQueryApi<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderQueryApi (ttl {}s)", self.cache_ttl_seconds)
    }
}

impl<B, C> OrderQueryApi<B, C> {
    pub fn new(db: B, cache: C, cache_ttl_seconds: u64) -> Self {
        Self { db, cache, cache_ttl_seconds }
    }
}

impl<B, C> OrderQueryApi<B, C>
where
    B: OrderManagement,
    C: OrderCache,
{
    /// Fetch all orders, serving from the cache when a list snapshot is present.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, OrderFlowError> {
        match self.cache.fetch(ORDERS_CACHE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Order>>(&raw) {
                Ok(orders) => {
                    trace!("🗂️📦️ Order list served from cache ({} orders)", orders.len());
                    return Ok(orders);
                },
                // A corrupt entry is treated as a miss; the write-back below overwrites it.
                Err(e) => warn!("🗂️📦️ Cached order list could not be deserialized. {e}"),
            },
            Ok(None) => trace!("🗂️📦️ Order list cache miss"),
            Err(e) => warn!("🗂️📦️ Cache read failed, falling back to the database. {e}"),
        }
        let orders = self.db.fetch_orders().await?;
        match serde_json::to_string(&orders) {
            Ok(raw) => {
                if let Err(e) = self.cache.store_with_expiry(ORDERS_CACHE_KEY, &raw, self.cache_ttl_seconds).await {
                    warn!("🗂️📦️ Could not write the order list back to the cache. {e}");
                }
            },
            Err(e) => warn!("🗂️📦️ Could not serialize the order list for caching. {e}"),
        }
        Ok(orders)
    }

    /// Fetch a single order by its public id. Detail reads bypass the cache.
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        self.db
            .fetch_order_by_id(order_id)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))
    }
}
