//! kasir - point-of-sale API server
//!
//! Serves products, categories and sales reports from PostgreSQL.
//! Configuration comes from flags, the environment, or a `.env` file in the
//! working directory (`PORT`, `DB_CONN`, `RUST_LOG`).

use anyhow::Result;
use clap::Parser;

mod commands;
mod tracing_setup;

use commands::serve::{run_serve, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "kasir",
    author,
    version,
    about = "Point-of-sale API: products, categories and sales reports"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads PORT / DB_CONN
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    run_serve(cli.serve).await
}
