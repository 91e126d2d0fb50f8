use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sos_common::{Cents, CentsConversionError};
use sqlx::{FromRow, Type};

//--------------------------------------        OrderId        -------------------------------------------------------
/// The public identifier of an order. Opaque to the engine; clients treat it as a handle.
#[derive(Debug, Clone, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generate a fresh order id. Uniqueness is enforced by the database, not by this function.
    pub fn random() -> Self {
        Self(format!("ord-{:016x}", rand::random::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//--------------------------------------       OrderItem       -------------------------------------------------------
/// A single line item on an order. `price` is the unit price in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
    pub price: Cents,
}

impl OrderItem {
    pub fn new<S: Into<String>>(product_id: S, quantity: i64, price: Cents) -> Self {
        Self { product_id: product_id.into(), quantity, price }
    }

    pub fn line_total(&self) -> Result<Cents, CentsConversionError> {
        self.price.line_total(self.quantity)
    }
}

//--------------------------------------         Order         -------------------------------------------------------
/// An order as stored in the database. Line items live in a JSON column; the database does not take a view on their
/// shape beyond what the engine writes.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_id: OrderId,
    pub user_id: String,
    #[sqlx(json)]
    pub items: Vec<OrderItem>,
    pub total_amount: Cents,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------        NewOrder       -------------------------------------------------------
/// An order as submitted at checkout, before it has been assigned a database row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    /// The total the client claims the items add up to. Verified against [`NewOrder::computed_total`] before the
    /// order is accepted.
    pub total_amount: Cents,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new<S: Into<String>>(user_id: S, items: Vec<OrderItem>, total_amount: Cents) -> Self {
        Self {
            order_id: OrderId::random(),
            user_id: user_id.into(),
            items,
            total_amount,
            created_at: Utc::now(),
        }
    }

    /// The sum of `price * quantity` over all line items.
    pub fn computed_total(&self) -> Result<Cents, CentsConversionError> {
        let mut total = Cents::default();
        for item in &self.items {
            total += item.line_total()?;
        }
        Ok(total)
    }
}

//--------------------------------------          User         -------------------------------------------------------
/// A storefront customer. Users are provisioned by the account subsystem; the order flow only ever reads them.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}
