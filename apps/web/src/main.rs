mod analysis;
mod config;
mod errors;
mod models;
mod review;
mod routes;
mod session;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::HttpAnalyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Review UI v{}", env!("CARGO_PKG_VERSION"));

    // Initialize analysis client
    let analyzer = HttpAnalyzer::new(config.analysis_endpoint.clone(), config.analysis_timeout)?;
    match config.analysis_timeout {
        Some(timeout) => info!(
            "Analysis endpoint: {} (timeout {}s)",
            analyzer.endpoint(),
            timeout.as_secs()
        ),
        None => info!("Analysis endpoint: {} (no timeout)", analyzer.endpoint()),
    }

    // Build app state
    let state = AppState::new(config.clone(), Arc::new(analyzer));

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
