//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token mirroring
//! - `cache` - Redis connection and retry policy
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `order` - Consignment ids, fee zone and page sizes
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod order;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use order::OrderConfig;
pub use server::ServerConfig;

/// Prefix for environment variable overrides, e.g. `APP_DATABASE__URL`
const ENV_PREFIX: &str = "APP";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Order intake configuration
    #[serde(default)]
    pub orders: OrderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            orders: OrderConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration for the current process.
    ///
    /// Sources, later ones winning:
    /// 1. built-in defaults for the detected environment
    /// 2. `config/default.toml` (optional)
    /// 3. `config/<environment>.toml` (optional)
    /// 4. `APP_*` environment variables, `__` separating nested keys
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let defaults = Config::try_from(&Self::for_environment(environment))?;

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that must never reach production
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Message(
                "auth.jwt.secret must be set in production".to_string(),
            ));
        }
        if self.orders.default_page_size == 0 || self.orders.max_page_size == 0 {
            return Err(ConfigError::Message(
                "orders page sizes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
