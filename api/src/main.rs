use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;

use order_api::app::{create_app, AppState};
use order_api::telemetry::init_tracing;
use order_core::services::CacheServiceTrait;
use order_infra::cache::{RedisCache, RedisClient};
use order_infra::database::{DatabasePool, MySqlOrderRepository, MySqlTokenRepository, MySqlUserRepository};
use order_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting order service");
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("Using the default JWT secret; set APP_AUTH__JWT__SECRET");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to MySQL")?;
    if config.database.run_migrations {
        pool.run_migrations().await.context("failed to run migrations")?;
    }

    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;
    let cache: Arc<dyn CacheServiceTrait> = Arc::new(RedisCache::new(redis));

    let db = pool.get_pool().clone();
    let server_config = config.server.clone();
    let state = web::Data::new(AppState::new(
        config,
        Arc::new(MySqlOrderRepository::new(db.clone())),
        Arc::new(MySqlUserRepository::new(db.clone())),
        Arc::new(MySqlTokenRepository::new(db)),
        cache,
    ));

    let bind_address = server_config.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .shutdown_timeout(server_config.shutdown_timeout)
        .keep_alive(Duration::from_secs(server_config.keep_alive))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.run().await.context("HTTP server failed")?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
