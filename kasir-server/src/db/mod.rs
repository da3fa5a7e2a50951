//! Database layer - connection pool and repositories
//!
//! Repositories are traits so handlers can be served from Postgres or from
//! the in-memory category store. Every Postgres statement is parameterized.

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, PoolSettings};
pub use repos::*;
