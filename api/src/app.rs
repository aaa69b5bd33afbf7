//! Application state and factory
//!
//! This module wires services over whatever repositories and cache it is
//! given and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use order_core::repositories::{OrderRepository, TokenRepository, UserRepository};
use order_core::services::{
    AuthService, AuthServiceConfig, CacheServiceTrait, OrderService, OrderServiceConfig,
    SessionGate, TokenService, TokenServiceConfig,
};
use order_shared::config::AppConfig;

use crate::config::{json_config, path_config, query_config};
use crate::handlers::error::{not_found, NOT_FOUND_MESSAGE};
use crate::middleware::{auth::JwtAuth, cors::create_cors, SessionVerifier};
use crate::routes::{auth, health, orders};

pub type SharedOrderService = OrderService<dyn OrderRepository, dyn CacheServiceTrait>;
pub type SharedAuthService = AuthService<dyn UserRepository, dyn TokenRepository, dyn CacheServiceTrait>;

/// Application state that holds shared services
pub struct AppState {
    pub order_service: Arc<SharedOrderService>,
    pub auth_service: Arc<SharedAuthService>,
    pub session_verifier: Arc<dyn SessionVerifier>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build every service from configuration plus the storage handles
    pub fn new(
        config: AppConfig,
        order_repository: Arc<dyn OrderRepository>,
        user_repository: Arc<dyn UserRepository>,
        token_repository: Arc<dyn TokenRepository>,
        cache: Arc<dyn CacheServiceTrait>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

        let order_service = Arc::new(OrderService::new(
            order_repository,
            Arc::clone(&cache),
            OrderServiceConfig::from(&config.orders),
        ));

        let auth_service = Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&token_repository),
            Arc::clone(&cache),
            Arc::clone(&token_service),
            AuthServiceConfig::from(&config.auth),
        ));

        let session_verifier: Arc<dyn SessionVerifier> = Arc::new(SessionGate::new(
            token_service,
            token_repository,
            cache,
            config.auth.token_cache_ttl,
        ));

        Self {
            order_service,
            auth_service,
            session_verifier,
            config: Arc::new(config),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors(app_state.config.environment, &app_state.config.server);
    let jwt = JwtAuth::new(Arc::clone(&app_state.session_verifier));

    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .wrap(cors)
        .wrap(TracingLogger::default())
        .service(
            web::scope("/api/v1")
                .route("/healthz", web::get().to(health::healthz))
                .route("/login", web::post().to(auth::login))
                .service(
                    web::resource("/logout")
                        .wrap(jwt.clone())
                        .route(web::post().to(auth::logout)),
                )
                .service(
                    web::scope("/orders")
                        .wrap(jwt)
                        .route("", web::post().to(orders::create_order))
                        .route("/all", web::get().to(orders::list_orders))
                        .route("/{consignment_id}/cancel", web::put().to(orders::cancel_order)),
                ),
        )
        .default_service(web::route().to(default_not_found))
}

async fn default_not_found() -> HttpResponse {
    not_found(NOT_FOUND_MESSAGE)
}
