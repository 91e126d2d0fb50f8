use std::env;

use log::*;
use paystack_tools::PaystackConfig;
use sos_common::parse_u64_or;
use storefront_order_engine::{cache::cache_url, sqlite::db::db_url};

const DEFAULT_SOS_HOST: &str = "127.0.0.1";
const DEFAULT_SOS_PORT: u16 = 8390;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    /// How long a cached order-list snapshot stays valid before the read path goes back to the database.
    pub cache_ttl_seconds: u64,
    pub paystack_config: PaystackConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SOS_HOST.to_string(),
            port: DEFAULT_SOS_PORT,
            database_url: String::default(),
            redis_url: String::default(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            paystack_config: PaystackConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SOS_HOST").ok().unwrap_or_else(|| DEFAULT_SOS_HOST.into());
        let port = env::var("SOS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SOS_PORT. {e} Using the default, {DEFAULT_SOS_PORT}, instead."
                    );
                    DEFAULT_SOS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SOS_PORT);
        let database_url = db_url();
        let redis_url = cache_url();
        let cache_ttl_seconds = parse_u64_or(env::var("SOS_CACHE_TTL").ok(), DEFAULT_CACHE_TTL_SECONDS);
        let paystack_config = PaystackConfig::new_from_env_or_default();
        Self { host, port, database_url, redis_url, cache_ttl_seconds, paystack_config }
    }
}
