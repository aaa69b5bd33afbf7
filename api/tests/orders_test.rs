//! Integration tests for order creation, listing and cancellation

mod common;

use actix_web::{http::StatusCode, test};
use order_api::app::create_app;
use serde_json::{json, Value};

use common::{bearer, order_body, TestContext};

#[actix_web::test]
async fn test_create_order() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(order_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order Created Successfully");
    assert_eq!(body["code"], "201");
    assert_eq!(body["data"]["order_status"], "Pending");
    assert_eq!(body["data"]["merchant_order_id"], "MO-1001");
    assert_eq!(body["data"]["delivery_fee"], 85.0);

    let consignment_id = body["data"]["consignment_id"].as_str().unwrap();
    assert!(consignment_id.starts_with("CN"));
    assert_eq!(consignment_id.len(), 14);

    let rows = ctx.orders.all_rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fees.cod_fee, 10.0);
    assert_eq!(rows[0].fees.total_fee, 95.0);
    assert!(ctx.cache.hash(&format!("order:{}", consignment_id)).await.is_some());
}

#[actix_web::test]
async fn test_create_order_validation_errors() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(json!({ "recipient_phone": "12345" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please fix the given errors");
    assert_eq!(body["code"], "422");
    assert_eq!(
        body["errors"]["store_id"],
        json!(["The store field is required.", "Wrong Store selected."])
    );
    assert_eq!(
        body["errors"]["recipient_phone"][0],
        "The recipient phone must be a valid mobile number."
    );
    assert!(body["errors"]["recipient_name"].is_array());
    assert!(body["errors"]["item_weight"].is_array());
    assert!(ctx.orders.all_rows().await.is_empty());
}

#[actix_web::test]
async fn test_create_order_with_wrongly_typed_field() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let mut body = order_body();
    body["store_id"] = json!("not-a-number");
    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_order_survives_cache_outage() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    ctx.cache.set_unavailable(true);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(order_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    assert_eq!(ctx.orders.all_rows().await.len(), 1);
}

#[actix_web::test]
async fn test_create_order_store_failure() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    ctx.orders.set_unavailable(true);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(order_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "error");
    assert!(!body["message"].as_str().unwrap().contains("unavailable"));
}

#[actix_web::test]
async fn test_list_orders_paginates() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/v1/orders")
            .insert_header(bearer(&token))
            .set_json(order_body())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all?limit=2&page=2")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Orders successfully fetched");
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["current_page"], 2);
    assert_eq!(body["data"]["per_page"], 2);
    assert_eq!(body["data"]["total_in_page"], 1);
    assert_eq!(body["data"]["last_page"], 2);
    assert_eq!(body["data"]["orders"][0]["delivery_type"], "Delivery");
}

#[actix_web::test]
async fn test_list_orders_only_returns_callers_orders() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    ctx.seed_user("rahim").await;
    let karim = ctx.login("karim").await;
    let rahim = ctx.login("rahim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&karim))
        .set_json(order_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all")
        .insert_header(bearer(&rahim))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["last_page"], 0);
}

#[actix_web::test]
async fn test_list_orders_filters() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(order_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all?transfer_status=pending&archive=0")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all?archive=1")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all?transfer_status=lost")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_list_orders_bad_query() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all?page=first")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["query"].is_array());
}

#[actix_web::test]
async fn test_cancel_order() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&token))
        .set_json(order_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let consignment_id = created["data"]["consignment_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/orders/{}/cancel", consignment_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order Cancelled Successfully.");

    assert!(ctx.cache.hash(&format!("order:{}", consignment_id)).await.is_none());

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 0);

    // Cancelling twice finds nothing left to cancel
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/orders/{}/cancel", consignment_id))
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cancel_by_non_owner_is_not_found() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    ctx.seed_user("rahim").await;
    let karim = ctx.login("karim").await;
    let rahim = ctx.login("rahim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/orders")
        .insert_header(bearer(&karim))
        .set_json(order_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let consignment_id = created["data"]["consignment_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/orders/{}/cancel", consignment_id))
        .insert_header(bearer(&rahim))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let rows = ctx.orders.all_rows().await;
    assert!(!rows[0].is_deleted());
}
