use thiserror::Error;

use crate::db_types::{NewOrder, Order, OrderId};

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

/// Create/find/delete operations on order records.
///
/// Implementations provide plain storage. Business rules (the total-amount invariant, cache maintenance) live in the
/// API layer, so none of these methods validate their input beyond what the schema enforces.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Store a new order and return the persisted record, including its assigned row id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError>;

    /// Fetch a single order by its public order id.
    async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Fetch all orders, oldest first.
    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderStoreError>;

    /// Physically delete the order with the given public id, returning the deleted record if it existed.
    async fn delete_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
}
