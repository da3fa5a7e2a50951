//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and an immediate ping so
//! a bad connection string fails at startup rather than on the first request.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};

use super::DbError;

/// Pool sizing and connection recycling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Upper bound on open connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// Connections older than this are closed and replaced
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 25,
            min_connections: 5,
            max_lifetime: Duration::from_secs(5 * 60),
        }
    }
}

/// Create a PostgreSQL connection pool with default settings.
///
/// # Errors
///
/// Returns [`DbError::EmptyConnectionString`] for an empty string, or the
/// driver error if connecting or pinging fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/kasir").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, DbError> {
    create_pool_with_options(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom settings.
pub async fn create_pool_with_options(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, DbError> {
    // Length only, never the contents
    tracing::info!(length = database_url.len(), "database connection string loaded");

    if database_url.is_empty() {
        return Err(DbError::EmptyConnectionString);
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(settings.max_lifetime)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to open database pool"))?;

    tracing::info!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "testing database connection"
    );
    let mut conn = pool.acquire().await?;
    conn.ping()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "database ping failed"))?;

    tracing::info!("database connected");
    Ok(pool)
}
