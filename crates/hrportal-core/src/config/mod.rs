//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an environment overlay, and environment
//! variables. Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod realtime;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;
use self::realtime::RealtimeConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and password settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Real-time listener settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{env}`,
    /// `HRPORTAL__*` variables, then the flat deployment variables
    /// `SIGNING_SECRET`, `TOKEN_TTL`, `DATABASE_URL`, `STORE_HOST` and
    /// `STORE_CREDENTIALS`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .set_default("server.environment", env)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("HRPORTAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.signing_secret", std::env::var("SIGNING_SECRET").ok())?
            .set_override_option("auth.token_ttl", std::env::var("TOKEN_TTL").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        if let Ok(host) = std::env::var("STORE_HOST") {
            let credentials = std::env::var("STORE_CREDENTIALS").ok();
            config.database.apply_store_location(&host, credentials.as_deref());
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later at request time.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.token_ttl()?;
        if self.auth.signing_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.signing_secret must not be empty"));
        }
        if self.database.backend == database::StoreBackend::Postgres && self.database.url.is_empty()
        {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }
        Ok(())
    }

    /// Whether internal error detail may be returned to clients.
    pub fn is_development(&self) -> bool {
        self.server.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_for_memory_backend() {
        let mut config = AppConfig::default();
        config.database.backend = database::StoreBackend::Memory;
        assert!(config.validate().is_ok());
        assert!(config.is_development());
    }

    #[test]
    fn test_postgres_backend_requires_url() {
        let mut config = AppConfig::default();
        config.database.url.clear();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("database.url"));
    }

    #[test]
    fn test_bad_ttl_is_rejected() {
        let mut config = AppConfig::default();
        config.auth.token_ttl = "seven days".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_ttl_fails_at_startup() {
        let mut config = AppConfig::default();
        config.database.backend = database::StoreBackend::Memory;
        config.auth.token_ttl = "100000000d".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("exceeds"));
    }
}
