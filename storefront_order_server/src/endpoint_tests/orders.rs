use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use sos_common::Cents;
use storefront_order_engine::{
    db_types::{NewOrder, Order, OrderId, OrderItem, User},
    OrderFlowApi,
    OrderQueryApi,
    ORDERS_CACHE_KEY,
};

use super::{
    helpers::{delete_request, get_request, post_request},
    mocks::{MockCache, MockOrderDb, MockProvider},
};
use crate::{
    integrations::PaymentInit,
    routes::{CreateOrderRoute, DeleteOrderRoute, OrderByIdRoute, OrdersRoute},
};

const CACHE_TTL: u64 = 600;

//----------------------------------------------   Checkout  ----------------------------------------------------

#[actix_web::test]
async fn create_order_returns_payment_url() {
    let _ = env_logger::try_init().ok();
    let body = json!({
        "userId": "1234567",
        "products": [{ "id": "prod1", "quantity": 1, "price": 1000 }],
        "totalAmount": 1000
    });
    let (status, body) = post_request("/orders/create", body, configure_checkout).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created successfully");
    assert_eq!(body["paymentUrl"], "pay_url");
    assert_eq!(body["paymentReference"], "ref123");
    assert_eq!(body["order"]["user_id"], "1234567");
    assert_eq!(body["order"]["total_amount"], 1000);
    assert_eq!(body["order"]["items"][0]["product_id"], "prod1");
}

#[actix_web::test]
async fn create_order_with_total_mismatch_is_rejected() {
    let _ = env_logger::try_init().ok();
    let body = json!({
        "userId": "user1",
        "products": [{ "price": 100, "quantity": 4 }],
        "totalAmount": 500
    });
    // The mocks carry no expectations: if the handler touches the database, the cache or the payment provider,
    // the test fails with an unexpected-call panic.
    let (status, body) = post_request("/orders/create", body, configure_checkout_untouched).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Total amount mismatch");
}

#[actix_web::test]
async fn create_order_for_unknown_user_is_not_found() {
    let _ = env_logger::try_init().ok();
    let body = json!({
        "userId": "ghost",
        "products": [{ "id": "prod1", "quantity": 2, "price": 100 }],
        "totalAmount": 200
    });
    let (status, body) = post_request("/orders/create", body, configure_checkout_no_user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User ghost not found");
}

fn configure_checkout(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_user_by_id().returning(|id| {
        Ok(Some(User {
            id: id.to_string(),
            email: "test@test.com".to_string(),
            name: None,
            created_at: Utc::now(),
        }))
    });
    db.expect_insert_order().returning(|order| Ok(stored_order(order)));
    let mut cache = MockCache::new();
    cache.expect_invalidate().withf(|key| key == ORDERS_CACHE_KEY).times(1).returning(|_| Ok(()));
    let mut provider = MockProvider::new();
    provider.expect_initialize_payment().times(1).returning(|_, _, _| {
        Ok(PaymentInit { payment_url: "pay_url".to_string(), reference: "ref123".to_string() })
    });
    register_checkout(cfg, db, cache, provider);
}

fn configure_checkout_untouched(cfg: &mut ServiceConfig) {
    register_checkout(cfg, MockOrderDb::new(), MockCache::new(), MockProvider::new());
}

fn configure_checkout_no_user(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_user_by_id().returning(|_| Ok(None));
    register_checkout(cfg, db, MockCache::new(), MockProvider::new());
}

fn register_checkout(cfg: &mut ServiceConfig, db: MockOrderDb, cache: MockCache, provider: MockProvider) {
    let flow_api = OrderFlowApi::new(db, cache);
    cfg.service(CreateOrderRoute::<MockOrderDb, MockCache, MockProvider>::new())
        .app_data(web::Data::new(flow_api))
        .app_data(web::Data::new(provider));
}

// Echo the submitted order back as if it had been assigned row id 1
fn stored_order(order: NewOrder) -> Order {
    Order {
        id: 1,
        order_id: order.order_id,
        user_id: order.user_id,
        items: order.items,
        total_amount: order.total_amount,
        created_at: order.created_at,
        updated_at: order.created_at,
    }
}

//----------------------------------------------   Order list  ----------------------------------------------------

#[actix_web::test]
async fn list_orders_with_cold_cache_queries_db_and_stores_snapshot() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders", configure_list_cold).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::from_str::<Value>(ORDERS_JSON).unwrap());
}

#[actix_web::test]
async fn list_orders_with_warm_cache_skips_db() {
    let _ = env_logger::try_init().ok();
    // The database mock carries no expectations, so a read through to it fails the test.
    let (status, body) = get_request("/orders", configure_list_warm).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::from_str::<Value>(ORDERS_JSON).unwrap());
}

fn configure_list_cold(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_orders().times(1).returning(|| Ok(orders_response()));
    let mut cache = MockCache::new();
    cache.expect_fetch().withf(|key| key == ORDERS_CACHE_KEY).times(1).returning(|_| Ok(None));
    cache
        .expect_store_with_expiry()
        .withf(|key, value, ttl| key == ORDERS_CACHE_KEY && value == ORDERS_JSON && *ttl == CACHE_TTL)
        .times(1)
        .returning(|_, _, _| Ok(()));
    register_list(cfg, db, cache);
}

fn configure_list_warm(cfg: &mut ServiceConfig) {
    let mut cache = MockCache::new();
    cache
        .expect_fetch()
        .withf(|key| key == ORDERS_CACHE_KEY)
        .times(1)
        .returning(|_| Ok(Some(ORDERS_JSON.to_string())));
    register_list(cfg, MockOrderDb::new(), cache);
}

fn register_list(cfg: &mut ServiceConfig, db: MockOrderDb, cache: MockCache) {
    let query_api = OrderQueryApi::new(db, cache, CACHE_TTL);
    cfg.service(OrdersRoute::<MockOrderDb, MockCache>::new())
        .service(OrderByIdRoute::<MockOrderDb, MockCache>::new())
        .app_data(web::Data::new(query_api));
}

//----------------------------------------------   Order detail  ----------------------------------------------------

#[actix_web::test]
async fn fetch_order_by_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders/ord-0000001", configure_detail).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order_id"], "ord-0000001");
    assert_eq!(body["total_amount"], 200000);
}

#[actix_web::test]
async fn fetch_missing_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders/ord-nope", configure_detail_missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order #ord-nope not found");
}

fn configure_detail(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_order_by_id()
        .withf(|id| id.as_str() == "ord-0000001")
        .returning(|_| Ok(Some(orders_response().remove(0))));
    register_list(cfg, db, MockCache::new());
}

fn configure_detail_missing(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_order_by_id().returning(|_| Ok(None));
    register_list(cfg, db, MockCache::new());
}

//----------------------------------------------   Order deletion  ----------------------------------------------------

#[actix_web::test]
async fn delete_order_invalidates_the_list_cache() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/orders/ord-0000001", configure_delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order #ord-0000001 deleted");
}

#[actix_web::test]
async fn delete_missing_order_is_not_found() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/orders/ord-nope", configure_delete_missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order #ord-nope not found");
}

fn configure_delete(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_delete_order()
        .withf(|id| id.as_str() == "ord-0000001")
        .times(1)
        .returning(|_| Ok(Some(orders_response().remove(0))));
    let mut cache = MockCache::new();
    cache.expect_invalidate().withf(|key| key == ORDERS_CACHE_KEY).times(1).returning(|_| Ok(()));
    register_delete(cfg, db, cache);
}

fn configure_delete_missing(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_delete_order().returning(|_| Ok(None));
    register_delete(cfg, db, MockCache::new());
}

fn register_delete(cfg: &mut ServiceConfig, db: MockOrderDb, cache: MockCache) {
    let flow_api = OrderFlowApi::new(db, cache);
    cfg.service(DeleteOrderRoute::<MockOrderDb, MockCache>::new()).app_data(web::Data::new(flow_api));
}

//----------------------------------------------   Fixtures  ----------------------------------------------------

// Mock response to `fetch_orders` and friends
fn orders_response() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            order_id: OrderId("ord-0000001".into()),
            user_id: "u1".to_string(),
            items: vec![OrderItem::new("laptop", 1, Cents::from(200_000))],
            total_amount: Cents::from(200_000),
            created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        },
        Order {
            id: 2,
            order_id: OrderId("ord-0000002".into()),
            user_id: "u2".to_string(),
            items: vec![OrderItem::new("mouse", 2, Cents::from(7_500))],
            total_amount: Cents::from(15_000),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 16, 11, 20, 0).unwrap(),
        },
    ]
}

const ORDERS_JSON: &str = r#"[{"id":1,"order_id":"ord-0000001","user_id":"u1","items":[{"product_id":"laptop","quantity":1,"price":200000}],"total_amount":200000,"created_at":"2024-02-29T13:30:00Z","updated_at":"2024-02-29T13:30:00Z"},{"id":2,"order_id":"ord-0000002","user_id":"u2","items":[{"product_id":"mouse","quantity":2,"price":7500}],"total_amount":15000,"created_at":"2024-03-15T18:30:00Z","updated_at":"2024-03-16T11:20:00Z"}]"#;
