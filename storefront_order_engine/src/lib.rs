//! Storefront Order Engine
//!
//! The engine holds everything below the HTTP layer of the storefront order server:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the supported backend. You should never need to
//!    access the database directly; use the public API objects instead. The exception is the data types used in the
//!    database, which are defined in the [`db_types`] module and are public.
//! 2. The order cache ([`mod@cache`]). Order-list reads go through a cache-aside layer backed by Redis. The contract
//!    is defined by the [`traits::OrderCache`] trait so that tests can substitute an in-memory double.
//! 3. The public API ([`OrderFlowApi`] and [`OrderQueryApi`]). These encode the business rules: the total-amount
//!    invariant on order creation, and the cache-aside policy on order listing. Backends need to implement the traits
//!    in the [`traits`] module to be usable here.
pub mod cache;
pub mod db_types;
pub mod traits;

mod soe_api;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use soe_api::{OrderFlowApi, OrderFlowError, OrderQueryApi, ORDERS_CACHE_KEY};
