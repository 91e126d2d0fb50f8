//! Cache backends for the order-list read path.
//!
//! The contract is [`crate::traits::OrderCache`]; the production implementation is [`RedisOrderCache`]. Tests use the
//! in-memory double from [`crate::test_utils`] instead of a live Redis.
mod redis_cache;

pub use redis_cache::{cache_url, RedisOrderCache};
