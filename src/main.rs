mod config;
mod db;
mod error;
mod gemini;
mod http;
mod ingest;
mod models;
mod positionstack;

use std::sync::Arc;

use config::AppConfig;
use http::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Whereabouts Service...");

    // Init DB
    let pool = db::init_pool(&config.database_url).await?;
    db::init_schema(&pool).await?;
    info!("Connected to database");

    // Start HTTP server
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(pool, config));
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
