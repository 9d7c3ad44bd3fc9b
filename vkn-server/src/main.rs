//! VK Community Callback Notifier
//!
//! Receives Callback API events for one community and relays each as a
//! personal message to the configured recipients.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::ConfigLoader;
use server::{build_router, run_server};
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use vkn_api::client::{VK_API_BASE, VkClient};
use vkn_core::handler::EventHandler;

/// VK community callback notifier
#[derive(Parser, Debug)]
#[command(name = "vkn-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./vkn-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting vkn-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = ConfigLoader::new(&args.config, args.listen);
    let loaded = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded.listen;
    tracing::info!("Configuration loaded from {:?}", args.config);

    // Build the VK client and the event handler
    let base_url = Url::parse(VK_API_BASE)?;
    let client = VkClient::new(
        base_url,
        loaded.notifier.access_token.clone(),
        loaded.notifier.api_version.clone(),
    );
    let state = AppState::new(EventHandler::new(loaded.notifier, client));

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    run_server(router, listen_addr).await.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
