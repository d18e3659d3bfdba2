//! HR Portal Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use hrportal_api::AppState;
use hrportal_core::config::AppConfig;
use hrportal_core::config::database::StoreBackend;
use hrportal_database::{DatabasePool, Stores, connection::mask_password, migration};
use hrportal_realtime::NotificationBus;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load configuration for `HRPORTAL_ENV` (default `development`).
fn load_configuration() -> anyhow::Result<AppConfig> {
    let env = std::env::var("HRPORTAL_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env).with_context(|| format!("loading configuration for '{env}'"))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!(
        environment = %config.server.environment,
        "Starting HR portal v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Stores ───────────────────────────────────────────
    let (stores, pool) = match config.database.backend {
        StoreBackend::Postgres => {
            tracing::info!(url = %mask_password(&config.database.url), "Using PostgreSQL store");
            let pool = DatabasePool::connect(&config.database).await?;

            if config.database.run_migrations {
                migration::run_migrations(pool.pool()).await?;
                tracing::info!("Database migrations complete");
            }

            (Stores::postgres(pool.pool().clone()), Some(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            (Stores::memory(), None)
        }
    };

    // ── Step 2: Realtime bus ─────────────────────────────────────
    let bus = Arc::new(NotificationBus::new(&config.realtime));

    // ── Step 3: Auth system and services ─────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let bootstrap = config.auth.bootstrap_admin.clone();
    let state = AppState::new(config, stores, bus)?;

    // ── Step 4: Bootstrap admin ──────────────────────────────────
    if let Some(admin) = bootstrap {
        if state.auth_service.ensure_bootstrap_admin(&admin).await? {
            tracing::info!(email = %admin.email, "Bootstrap admin account created");
        }
    }

    // ── Step 5: Serve until shutdown ─────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    hrportal_api::app::serve(listener, state).await?;

    if let Some(pool) = pool {
        pool.close().await;
    }

    tracing::info!("HR portal stopped");
    Ok(())
}
