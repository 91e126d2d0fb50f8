use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use serde_json::Value;

async fn send_request(req: TestRequest, configure: fn(&mut ServiceConfig)) -> (StatusCode, Value) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    let (_, res) = test::call_service(&service, req.to_request()).await.into_parts();
    let status = res.status();
    let body = res.into_body().try_into_bytes().unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, Value) {
    send_request(TestRequest::get().uri(path), configure).await
}

pub async fn post_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, Value) {
    send_request(TestRequest::post().uri(path).set_json(body), configure).await
}

pub async fn delete_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, Value) {
    send_request(TestRequest::delete().uri(path), configure).await
}
