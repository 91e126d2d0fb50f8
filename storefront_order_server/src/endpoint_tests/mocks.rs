use mockall::mock;
use sos_common::Cents;
use storefront_order_engine::{
    db_types::{NewOrder, Order, OrderId, User},
    traits::{CacheError, OrderCache, OrderManagement, OrderStoreError, StorefrontDatabase, UserManagement},
};

use crate::integrations::{PaymentInit, PaymentProvider, PaymentProviderError};

mock! {
    pub OrderDb {}
    impl OrderManagement for OrderDb {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError>;
        async fn fetch_order_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
        async fn fetch_orders(&self) -> Result<Vec<Order>, OrderStoreError>;
        async fn delete_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
    }
    impl UserManagement for OrderDb {
        async fn fetch_user_by_id(&self, user_id: &str) -> Result<Option<User>, OrderStoreError>;
        async fn upsert_user(&self, user: User) -> Result<(), OrderStoreError>;
    }
}

impl StorefrontDatabase for MockOrderDb {}

mock! {
    pub Cache {}
    impl OrderCache for Cache {
        async fn fetch(&self, key: &str) -> Result<Option<String>, CacheError>;
        async fn store_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;
        async fn invalidate(&self, key: &str) -> Result<(), CacheError>;
    }
}

mock! {
    pub Provider {}
    impl PaymentProvider for Provider {
        async fn initialize_payment(&self, email: &str, amount: Cents, order_id: &OrderId) -> Result<PaymentInit, PaymentProviderError>;
    }
}
