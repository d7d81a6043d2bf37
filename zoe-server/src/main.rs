//! # Static Site Server
//!
//! Thin entry point that delegates to the library for server setup.

use zoe_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    start_server(config).await
}
