//! Shared harness for the API integration tests
//!
//! Builds the real application over the in-memory repositories and cache.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, web};
use serde_json::{json, Value};

use order_api::app::AppState;
use order_core::domain::entities::user::User;
use order_core::repositories::{MockOrderRepository, MockTokenRepository, MockUserRepository, UserRepository};
use order_core::services::auth::hash_password;
use order_core::services::{LoginCredentials, MockCacheService};
use order_shared::config::AppConfig;

pub const PASSWORD: &str = "s3cret-pass";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub config: AppConfig,
    pub orders: MockOrderRepository,
    pub users: MockUserRepository,
    pub tokens: MockTokenRepository,
    pub cache: MockCacheService,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 4;
        let orders = MockOrderRepository::new();
        let users = MockUserRepository::new();
        let tokens = MockTokenRepository::new();
        let cache = MockCacheService::new();

        let state = web::Data::new(AppState::new(
            config.clone(),
            Arc::new(orders.clone()),
            Arc::new(users.clone()),
            Arc::new(tokens.clone()),
            Arc::new(cache.clone()),
        ));

        Self {
            state,
            config,
            orders,
            users,
            tokens,
            cache,
        }
    }

    /// Insert a user whose password is [`PASSWORD`]
    pub async fn seed_user(&self, user_name: &str) -> User {
        let hash = hash_password(PASSWORD, 4).unwrap();
        self.users
            .create(User::new(0, user_name, format!("{}@courier.test", user_name), hash))
            .await
            .unwrap()
    }

    /// Log `user_name` in through the auth service and return the access token
    pub async fn login(&self, user_name: &str) -> String {
        self.state
            .auth_service
            .login(LoginCredentials {
                user_name: Some(user_name.to_string()),
                email: None,
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap()
            .access_token
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn order_body() -> Value {
    json!({
        "store_id": 131172,
        "merchant_order_id": "MO-1001",
        "recipient_name": "Karim Uddin",
        "recipient_phone": "01812345678",
        "recipient_address": "House 12, Road 4, Mirpur",
        "recipient_city": 1,
        "recipient_zone": 1,
        "recipient_area": 1,
        "delivery_type": 2,
        "item_type": 2,
        "item_quantity": 1,
        "item_weight": 1.3,
        "amount_to_collect": 1000
    })
}
