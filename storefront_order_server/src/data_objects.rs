use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sos_common::Cents;
use storefront_order_engine::db_types::{NewOrder, Order, OrderItem};

/// The checkout request body. Field names are camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub user_id: String,
    pub products: Vec<ProductLine>,
    pub total_amount: Cents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductLine {
    // Some storefront clients omit the product id on anonymous lines
    #[serde(default)]
    pub id: String,
    pub quantity: i64,
    pub price: Cents,
}

impl From<NewOrderRequest> for NewOrder {
    fn from(req: NewOrderRequest) -> Self {
        let items = req.products.into_iter().map(|p| OrderItem::new(p.id, p.quantity, p.price)).collect();
        NewOrder::new(req.user_id, items, req.total_amount)
    }
}

/// The 201 response for a successful checkout: the persisted order plus the payment redirect data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
    pub payment_url: String,
    pub payment_reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}
