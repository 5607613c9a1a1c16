// Copyright (c) 2026 Derma Node
// SPDX-License-Identifier: MIT
use anyhow::Result;
use derma_node::{api::start_server, NodeConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🩺 Starting Derma Node demo service...\n");
    println!("📦 BUILD VERSION: {}", derma_node::version::VERSION);
    println!("📅 Build Date: {}", derma_node::version::BUILD_DATE);
    println!();

    let config = NodeConfig::from_env();
    tracing::info!(
        "Model repo: {} (local override: {:?}), static dir: {}",
        config.model_repo,
        config.model_path,
        config.static_dir.display()
    );

    start_server(config)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    Ok(())
}
