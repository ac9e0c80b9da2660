// ABOUTME: PetHealth HTTP server binary
// ABOUTME: Loads environment configuration, initializes logging, and serves the diagnostic API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetHealth Contributors

//! # `PetHealth` Server Binary
//!
//! Starts the JSON-over-HTTP nutrition diagnostic service.

use anyhow::Result;
use clap::Parser;
use pethealth_server::config::ServerConfig;
use pethealth_server::constants::routes::API_V1;
use pethealth_server::logging;
use pethealth_server::resources::ServerResources;
use pethealth_server::server::run_server;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pethealth-server")]
#[command(about = "PetHealth - canine nutrition and weight diagnostic API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }
    config.validate()?;

    info!("Starting PetHealth diagnostic server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    info!(breeds = resources.registry.len(), "Breed registry loaded");
    display_available_endpoints();

    if let Err(e) = run_server(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints() {
    info!("Available endpoints:");
    info!("  GET  /health");
    info!("  GET  /ready");
    info!("  POST {API_V1}/diagnostics");
    info!("  POST {API_V1}/diagnostics/batch");
    info!("  GET  {API_V1}/breeds");
    info!("  GET  {API_V1}/breeds/{{breed_name}}");
}
