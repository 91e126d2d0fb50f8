mod errors;
mod order_flow_api;
mod order_query_api;

pub use errors::OrderFlowError;
pub use order_flow_api::OrderFlowApi;
pub use order_query_api::{OrderQueryApi, ORDERS_CACHE_KEY};
