//! HTTP server command for the kasir API
//!
//! Validates configuration, opens the database pool, then serves until
//! shutdown. Any startup failure is returned to `main`, which exits non-zero.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use kasir_server::config::DEFAULT_PORT;
use kasir_server::db::create_pool;
use kasir_server::http::{run_server, ServerConfig};
use kasir_server::{AppState, KasirConfig};

/// Arguments for serving the API
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (all interfaces)
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DB_CONN", hide_env_values = true)]
    pub db_conn: Option<String>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = KasirConfig::new(args.port, args.db_conn)
        .context("Invalid configuration. Set DB_CONN via --db-conn, the environment, or .env")?;

    let pool = create_pool(&config.db_conn)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::from_pool(pool);
    let server_config = ServerConfig {
        bind_addr: config.bind_addr(),
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting kasir API on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
