//! kasir-kategori-demo - standalone category API
//!
//! Serves `/categories` CRUD from an in-memory store seeded with three
//! categories. Nothing is persisted; restarting resets the data.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use kasir_server::http::{run_demo_server, ServerConfig};
use kasir_server::memory::MemoryCategoryRepo;
use kasir_server::services::CategoryService;

#[path = "../tracing_setup.rs"]
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "kasir-kategori-demo",
    version,
    about = "In-memory category API (no database)"
)]
struct DemoArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = DemoArgs::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: args.debug })?;

    let categories = CategoryService::new(Arc::new(MemoryCategoryRepo::seeded()));
    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(30),
    };

    tracing::info!("Starting category demo on {}", config.bind_addr);
    run_demo_server(categories, config)
        .await
        .context("Server error")
}
