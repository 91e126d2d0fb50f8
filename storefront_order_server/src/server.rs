use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use storefront_order_engine::{cache::RedisOrderCache, OrderFlowApi, OrderQueryApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::PaystackGateway,
    routes::{health, CreateOrderRoute, DeleteOrderRoute, OrderByIdRoute, OrdersRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let cache = RedisOrderCache::new_with_url(&config.redis_url)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let gateway = PaystackGateway::new(config.paystack_config.clone())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db, cache, gateway)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    cache: RedisOrderCache,
    gateway: PaystackGateway,
) -> Result<Server, ServerError> {
    let cache_ttl_seconds = config.cache_ttl_seconds;
    let srv = HttpServer::new(move || {
        let flow_api = OrderFlowApi::new(db.clone(), cache.clone());
        let query_api = OrderQueryApi::new(db.clone(), cache.clone(), cache_ttl_seconds);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("sos::access_log"))
            .app_data(web::Data::new(flow_api))
            .app_data(web::Data::new(query_api))
            .app_data(web::Data::new(gateway.clone()))
            .service(health)
            .service(CreateOrderRoute::<SqliteDatabase, RedisOrderCache, PaystackGateway>::new())
            .service(OrdersRoute::<SqliteDatabase, RedisOrderCache>::new())
            .service(OrderByIdRoute::<SqliteDatabase, RedisOrderCache>::new())
            .service(DeleteOrderRoute::<SqliteDatabase, RedisOrderCache>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
