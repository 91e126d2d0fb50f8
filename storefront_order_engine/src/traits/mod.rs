//! # Storage and cache contracts.
//!
//! This module defines the interface contracts that engine *backends* implement.
//!
//! * [`OrderManagement`] provides create/find/delete operations on order records.
//! * [`UserManagement`] provides read access to storefront customers.
//! * [`StorefrontDatabase`] is the umbrella trait the HTTP layer binds its mutation handlers to. Any type that
//!   implements both management traits qualifies.
//! * [`OrderCache`] is the key-value contract backing the cache-aside read path.
//!
//! The concrete implementations live in [`crate::sqlite`] and [`crate::cache`]. Endpoint tests substitute mocks for
//! all of these.
mod order_cache;
mod order_management;
mod storefront_database;
mod user_management;

pub use order_cache::{CacheError, OrderCache};
pub use order_management::{OrderManagement, OrderStoreError};
pub use storefront_database::StorefrontDatabase;
pub use user_management::UserManagement;
