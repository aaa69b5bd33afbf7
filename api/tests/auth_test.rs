//! Integration tests for the login and logout endpoints

mod common;

use actix_web::{http::StatusCode, test};
use order_api::app::create_app;
use order_core::domain::entities::token::TokenKind;
use serde_json::{json, Value};

use common::{bearer, TestContext, PASSWORD};

#[actix_web::test]
async fn test_login_success() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": "karim", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "success");
    assert_eq!(body["code"], "200");
    assert_eq!(body["data"]["token_type"], "Bearer");

    let access = body["data"]["access_token"].as_str().unwrap();
    let refresh = body["data"]["refresh_token"].as_str().unwrap();
    assert!(ctx.cache.contains(&format!("access_token:{}", access)).await);
    assert!(ctx.cache.contains(&format!("refresh_token:{}", refresh)).await);
    assert_eq!(ctx.tokens.rows(TokenKind::Access).await[0].user_id, user.id);
}

#[actix_web::test]
async fn test_login_by_email() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": "karim@courier.test", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_login_with_all_fields_and_blank_email() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": "karim", "email": "", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let wrong_password = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": "karim", "password": "not-it" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body: Value = test::read_body_json(resp).await;

    let unknown_user = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": "nobody", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, unknown_user).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password_body, unknown_user_body);
    assert_eq!(wrong_password_body["message"], "The user credentials were incorrect.");
}

#[actix_web::test]
async fn test_login_requires_password() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": "karim" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["password"][0], "The password field is required.");
}

#[actix_web::test]
async fn test_login_requires_an_identifier() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_with_malformed_json() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "error");
    assert!(body["errors"]["body"].is_array());
}

#[actix_web::test]
async fn test_second_login_revokes_first_session() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let first = ctx.login("karim").await;
    let second = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all")
        .insert_header(bearer(&first))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all")
        .insert_header(bearer(&second))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_logout_success() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/logout")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Successfully logged out");
    assert!(!ctx.cache.contains(&format!("access_token:{}", token)).await);
    assert!(ctx.tokens.rows(TokenKind::Access).await.iter().all(|t| t.is_revoked()));
}

#[actix_web::test]
async fn test_logout_without_auth() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "error");
    assert_eq!(body["code"], "401");
}

#[actix_web::test]
async fn test_token_rejected_after_logout() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_token_rejected_after_logout_even_if_cache_was_down() {
    let ctx = TestContext::new();
    ctx.seed_user("karim").await;
    let token = ctx.login("karim").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    // Eviction fails, so the stale mirror entry survives logout
    ctx.cache.set_unavailable(true);
    let req = test::TestRequest::post()
        .uri("/api/v1/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // With the cache down the gate has to consult the store
    let req = test::TestRequest::get()
        .uri("/api/v1/orders/all")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
