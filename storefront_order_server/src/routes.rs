//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. For this reason, any long, non-cpu-bound operation (e.g. I/O,
//! database operations, etc.) must be expressed as futures or asynchronous functions. Async handlers get executed
//! concurrently by worker threads and thus don't block execution.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use storefront_order_engine::{
    db_types::OrderId,
    traits::{OrderCache, OrderManagement, StorefrontDatabase},
    OrderFlowApi,
    OrderQueryApi,
};

use crate::{
    data_objects::{JsonResponse, NewOrderRequest, OrderCreatedResponse},
    errors::ServerError,
    integrations::PaymentProvider,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/orders/create" impl StorefrontDatabase, OrderCache, PaymentProvider);
/// Route handler for the checkout endpoint
///
/// The body carries the cart (`userId`, `products`, `totalAmount`). The engine enforces the total-amount invariant
/// and persists the order; the payment provider is then asked to open a hosted checkout session, and its redirect
/// URL and reference are echoed back alongside the persisted order.
///
/// The payment call happens after the order is stored. If the gateway is down the client receives a 502 and can
/// retry payment for the already-recorded order.
pub async fn create_order<B, C, P>(
    body: web::Json<NewOrderRequest>,
    api: web::Data<OrderFlowApi<B, C>>,
    provider: web::Data<P>,
) -> Result<HttpResponse, ServerError>
where
    B: StorefrontDatabase,
    C: OrderCache,
    P: PaymentProvider,
{
    let request = body.into_inner();
    debug!("💻️ POST new order for user {}", request.user_id);
    let (order, user) = api.process_new_order(request.into()).await?;
    let init = provider.initialize_payment(&user.email, order.total_amount, &order.order_id).await?;
    let response = OrderCreatedResponse {
        message: "Order created successfully".to_string(),
        order,
        payment_url: init.payment_url,
        payment_reference: init.reference,
    };
    Ok(HttpResponse::Created().json(response))
}

route!(orders => Get "/orders" impl OrderManagement, OrderCache);
/// Route handler for the order list endpoint
///
/// Serves the full order list, through the engine's cache-aside layer: a fresh snapshot is served from the cache,
/// otherwise the database is queried and the snapshot written back with the configured expiry.
pub async fn orders<B, C>(api: web::Data<OrderQueryApi<B, C>>) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement,
    C: OrderCache,
{
    debug!("💻️ GET orders");
    let orders = api.fetch_orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(order_by_id => Get "/orders/{order_id}" impl OrderManagement, OrderCache);
/// Route handler for the order detail endpoint. Detail reads bypass the cache.
pub async fn order_by_id<B, C>(
    path: web::Path<String>,
    api: web::Data<OrderQueryApi<B, C>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement,
    C: OrderCache,
{
    let order_id = OrderId(path.into_inner());
    debug!("💻️ GET order {order_id}");
    let order = api.fetch_order(&order_id).await?;
    Ok(HttpResponse::Ok().json(order))
}

route!(delete_order => Delete "/orders/{order_id}" impl StorefrontDatabase, OrderCache);
/// Route handler for the order deletion endpoint
///
/// Deletes the order and invalidates the cached order list, so the list endpoint reflects the deletion immediately
/// rather than after the cache expiry.
pub async fn delete_order<B, C>(
    path: web::Path<String>,
    api: web::Data<OrderFlowApi<B, C>>,
) -> Result<HttpResponse, ServerError>
where
    B: StorefrontDatabase,
    C: OrderCache,
{
    let order_id = OrderId(path.into_inner());
    debug!("💻️ DELETE order {order_id}");
    let deleted = api.delete_order(&order_id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("Order {} deleted", deleted.order_id))))
}
