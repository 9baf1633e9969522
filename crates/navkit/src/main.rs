//! Navkit preview server.
//!
//! Serves every menu from the menu file rendered in all three styles for
//! whatever path is requested, so active-state handling can be checked by
//! browsing.

mod preview;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navkit::config::ServerConfig;

use crate::preview::PreviewState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    info!(port = config.port, menu_file = %config.menu_file.display(), "Configuration loaded");

    let state = PreviewState::load(&config).context("failed to load preview state")?;

    let app = preview::router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Preview server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,navkit=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
