//! Service entry-point: loads settings, builds the connection pool, and runs
//! the HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::DbPool;
use users_api::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let pool_config = settings.pool_config().map_err(std::io::Error::other)?;
    info!(
        database = %settings.redacted_connection_string(),
        pool_max_size = pool_config.max_size(),
        pool_connection_timeout = ?pool_config.connection_timeout(),
        "connecting lazily to user store"
    );

    // Connections open on demand; requests report store outages individually.
    let db_pool = DbPool::connect_lazily(&pool_config);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, db_pool))?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
