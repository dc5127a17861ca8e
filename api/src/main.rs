//! OmniAgent API Server
//!
//! Serves AI research briefs over HTTP. Uses hexagonal (ports & adapters)
//! architecture: the brief content comes from a `BriefSource` port, and
//! today the only adapter is the placeholder source.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod router;



use adapters::PlaceholderBriefSource;
use config::{Config, LogFormat};
use router::{create_router, AppState};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    init_tracing(&config);

    tracing::info!(
        app_name = %config.app_name,
        app_version = %config.app_version,
        "application_starting"
    );

    let state = AppState::new(config.clone(), Arc::new(PlaceholderBriefSource));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app).await?;

    Ok(())
}
