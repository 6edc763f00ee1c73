mod config;
mod errors;
mod models;
mod routes;
mod screening;
mod state;
mod store;
mod theme;
mod upload;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upload::client::HttpScreeningClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener web v{}", env!("CARGO_PKG_VERSION"));

    let screening = HttpScreeningClient::new(
        config.screening_api_url.clone(),
        Duration::from_secs(config.screening_timeout_secs),
    )?;
    info!(
        "Screening service: {} (timeout {}s)",
        config.screening_api_url, config.screening_timeout_secs
    );
    info!(
        "Upload limits: {} bytes per resume, {} bytes per request",
        config.max_resume_bytes, config.max_request_bytes
    );

    let state = AppState::new(config.clone(), Arc::new(screening));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
