use crate::{db_types::User, traits::OrderStoreError};

/// Read access to storefront customers.
///
/// The order flow never creates users; they are provisioned by the account subsystem. `upsert_user` exists for test
/// setups and operational tooling.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    async fn fetch_user_by_id(&self, user_id: &str) -> Result<Option<User>, OrderStoreError>;

    async fn upsert_user(&self, user: User) -> Result<(), OrderStoreError>;
}
