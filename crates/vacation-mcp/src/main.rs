//! MCP server for the vacation ledger.
//!
//! This server exposes vacation balance, logging, history and name lookup
//! tools over the Model Context Protocol (MCP), plus health and greeting
//! resources.

mod resources;
mod server;
mod state;
mod tools;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};
use server::VacationMcpServer;
use state::ServerState;
use vacation_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is reserved for JSON-RPC)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var_os("VACATION_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading configuration from {}", path.display());
            Config::load(&path)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let state = ServerState::from_config(&config).context("invalid employee roster")?;

    let count = state.ledger.read().await.len();
    tracing::info!(
        policy = ?config.log_policy(),
        "Loaded {} employees",
        count
    );

    let server = VacationMcpServer::new(state);

    tracing::info!("Starting MCP server over stdio");
    let service = server.serve(stdio()).await?;
    let quit_reason = service.waiting().await?;
    tracing::info!("Server stopped: {:?}", quit_reason);

    Ok(())
}
