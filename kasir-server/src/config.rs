//! Startup configuration
//!
//! The binary reads these from flags or the process environment (optionally
//! seeded from a `.env` file):
//! - `PORT`: listen port on all interfaces (default: 8080)
//! - `DB_CONN`: PostgreSQL connection string (required)
//!
//! Validation returns a [`ConfigError`]; the entrypoint decides whether to abort.

use std::net::SocketAddr;

/// Default listen port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration rejected at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DB_CONN environment variable is empty")]
    MissingDbConn,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct KasirConfig {
    pub port: u16,
    pub db_conn: String,
}

impl KasirConfig {
    /// Validate raw values. A missing or blank connection string is an error.
    pub fn new(port: u16, db_conn: Option<String>) -> Result<Self, ConfigError> {
        let db_conn = db_conn
            .filter(|conn| !conn.trim().is_empty())
            .ok_or(ConfigError::MissingDbConn)?;

        Ok(Self { port, db_conn })
    }

    /// Listen address: `0.0.0.0:<port>`
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
