//! `SqliteDatabase` is a concrete implementation of a storefront order engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements the storage traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{new_pool, orders, users};
use crate::{
    db_types::{NewOrder, Order, OrderId, User},
    traits::{OrderManagement, OrderStoreError, StorefrontDatabase, UserManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object with a connection pool of size `max_connections`.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        orders::insert_order(order, &mut conn).await
    }

    async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        let order = orders::fetch_order_by_order_id(order_id, &mut conn).await?;
        Ok(order)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        let orders = orders::fetch_orders(&mut conn).await?;
        Ok(orders)
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        let order = orders::delete_order(order_id, &mut conn).await?;
        Ok(order)
    }
}

impl UserManagement for SqliteDatabase {
    async fn fetch_user_by_id(&self, user_id: &str) -> Result<Option<User>, OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        let user = users::fetch_user_by_id(user_id, &mut conn).await?;
        Ok(user)
    }

    async fn upsert_user(&self, user: User) -> Result<(), OrderStoreError> {
        let mut conn = self.pool.acquire().await.map_err(OrderStoreError::from)?;
        users::upsert_user(user, &mut conn).await?;
        Ok(())
    }
}

impl StorefrontDatabase for SqliteDatabase {}
