// ABOUTME: Food analysis proxy command for seneca-cli
// ABOUTME: Binds the local port and serves the proxy until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use seneca_coach::config::BackendConfig;
use seneca_coach::external::BackendClient;
use seneca_coach::routes::FoodProxyRoutes;

/// Serve the food analysis proxy on `host:port`
pub async fn run(config: &BackendConfig, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Cannot bind food proxy to {host}:{port}"))?;

    FoodProxyRoutes::serve(listener, BackendClient::new(&config.base_url)).await?;
    Ok(())
}
