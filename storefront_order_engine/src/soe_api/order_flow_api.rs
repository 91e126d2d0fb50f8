use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewOrder, Order, OrderId, User},
    soe_api::{order_query_api::ORDERS_CACHE_KEY, OrderFlowError},
    traits::{OrderCache, StorefrontDatabase},
};

/// `OrderFlowApi` is the primary API for handling order mutations: checkout and deletion.
///
/// It owns the total-amount invariant and keeps the order-list cache entry from outliving a mutation: both checkout
/// and deletion invalidate the cached list, so the read path can never serve a deleted order for the remainder of the
/// cache TTL.
pub struct OrderFlowApi<B, C> {
    db: B,
    cache: C,
}

impl<B, C> Debug for OrderFlowApi<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B, C> OrderFlowApi<B, C> {
    pub fn new(db: B, cache: C) -> Self {
        Self { db, cache }
    }
}

impl<B, C> OrderFlowApi<B, C>
where
    B: StorefrontDatabase,
    C: OrderCache,
{
    /// Submit a new order.
    ///
    /// The order is validated (non-empty, positive quantities and prices, and the total-amount invariant), its owner
    /// is fetched, and the order is persisted. Returns the stored order and the owning user, so that the caller can
    /// hand the user's email to the payment provider without a second lookup.
    ///
    /// Validation happens before any I/O; an invalid order never touches the database.
    pub async fn process_new_order(&self, order: NewOrder) -> Result<(Order, User), OrderFlowError> {
        verify_new_order(&order)?;
        let user = self
            .db
            .fetch_user_by_id(&order.user_id)
            .await?
            .ok_or_else(|| OrderFlowError::UserNotFound(order.user_id.clone()))?;
        let stored = self.db.insert_order(order).await?;
        self.invalidate_order_list().await;
        debug!("🔄️📦️ Order [{}] processing complete for user {}", stored.order_id, user.id);
        Ok((stored, user))
    }

    /// Delete an order by its public id, returning the deleted record.
    pub async fn delete_order(&self, order_id: &OrderId) -> Result<Order, OrderFlowError> {
        let deleted = self
            .db
            .delete_order(order_id)
            .await?
            .ok_or_else(|| OrderFlowError::OrderNotFound(order_id.clone()))?;
        self.invalidate_order_list().await;
        debug!("🔄️🗑️ Order [{}] deleted", deleted.order_id);
        Ok(deleted)
    }

    /// Cache invalidation is best-effort: a failure here means a stale list entry for at most one TTL, which is not
    /// worth failing the mutation over.
    async fn invalidate_order_list(&self) {
        if let Err(e) = self.cache.invalidate(ORDERS_CACHE_KEY).await {
            warn!("🔄️🗂️ Could not invalidate the order list cache. {e}");
        }
    }
}

fn verify_new_order(order: &NewOrder) -> Result<(), OrderFlowError> {
    if order.items.is_empty() {
        return Err(OrderFlowError::EmptyOrder);
    }
    if let Some(item) = order.items.iter().find(|i| i.quantity <= 0) {
        return Err(OrderFlowError::InvalidOrder(format!(
            "Product {} has non-positive quantity {}",
            item.product_id, item.quantity
        )));
    }
    if let Some(item) = order.items.iter().find(|i| i.price.value() < 0) {
        return Err(OrderFlowError::InvalidOrder(format!("Product {} has a negative price", item.product_id)));
    }
    let computed = order.computed_total().map_err(|e| OrderFlowError::InvalidOrder(e.to_string()))?;
    if computed != order.total_amount {
        debug!(
            "🔄️📦️ Order [{}] rejected. Claimed total {} but line items sum to {computed}",
            order.order_id, order.total_amount
        );
        return Err(OrderFlowError::TotalAmountMismatch);
    }
    Ok(())
}
