//! # clienteled — clientele daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and create the schema
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use clientele_adapter_http_axum::state::AppState;
use clientele_adapter_storage_sqlite_sqlx::{Config as DatabaseConfig, SqliteCustomerRepository};
use clientele_app::services::customer_service::CustomerService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    tracing::info!(database_url = config.database_url(), "database initialised");

    // Repositories & services
    let customer_repo = SqliteCustomerRepository::new(db.pool().clone());
    let customer_service = CustomerService::new(customer_repo);

    // HTTP
    let app = clientele_adapter_http_axum::router::build(AppState::new(customer_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "clienteled listening");

    axum::serve(listener, app).await?;

    Ok(())
}
