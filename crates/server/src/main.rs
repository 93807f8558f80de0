//! `supermatch-server` binary crate — HTTP REST API exposing the matching
//! orchestration core, with API-key authentication and per-key rate
//! limiting.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
