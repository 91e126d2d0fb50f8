use thiserror::Error;

use crate::{db_types::OrderId, traits::OrderStoreError};

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    /// The client-supplied total disagrees with the computed line-item sum. The display string is part of the client
    /// contract; do not reword it.
    #[error("Total amount mismatch")]
    TotalAmountMismatch,
    #[error("Order must contain at least one product")]
    EmptyOrder,
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("User {0} not found")]
    UserNotFound(String),
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<OrderStoreError> for OrderFlowError {
    fn from(e: OrderStoreError) -> Self {
        Self::DatabaseError(e.to_string())
    }
}
